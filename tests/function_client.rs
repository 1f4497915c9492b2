//! `FunctionClient` against a one-shot HTTP responder on localhost.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use text_corrector::clipboard::{Clipboard, ClipboardError};
use text_corrector::config::ServiceConfig;
use text_corrector::correction::{
    CorrectionClient, CorrectionError, CorrectionRequest, CorrectionResponse, FunctionClient,
};
use text_corrector::download::{AssetDownloader, DownloadError, ReferenceAsset};
use text_corrector::notify::{Notification, Notifier};
use text_corrector::orchestrator::{CorrectionOrchestrator, RequestStatus};

// ---------------------------------------------------------------------------
// One-shot server
// ---------------------------------------------------------------------------

/// Accept one connection, answer with `status` + `body`, return the raw
/// request text.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}/functions/v1/correct-text"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.expect("read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn client_for(url: String, api_key: Option<&str>) -> FunctionClient {
    FunctionClient::from_config(&ServiceConfig {
        endpoint_url: url,
        api_key: api_key.map(str::to_string),
        timeout_secs: 5,
        ..ServiceConfig::default()
    })
}

// ---------------------------------------------------------------------------
// Client tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn posts_text_and_decodes_correction() {
    let (url, server) = serve_once("200 OK", r#"{"correctedText":"Hola mundo."}"#).await;
    let client = client_for(url, None);

    let resp = client
        .correct(&CorrectionRequest::new("hola mundo"))
        .await
        .expect("response");
    assert_eq!(resp, CorrectionResponse::Corrected("Hola mundo.".into()));

    let request = server.await.expect("server");
    assert!(request.starts_with("POST /functions/v1/correct-text "));
    assert!(request.ends_with(r#"{"text":"hola mundo"}"#), "{request}");
    assert!(!request.to_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn error_body_is_a_rejection() {
    let (url, server) = serve_once("200 OK", r#"{"error":"rate limited"}"#).await;
    let client = client_for(url, None);

    let resp = client.correct(&CorrectionRequest::new("hola")).await.unwrap();
    assert_eq!(resp, CorrectionResponse::Rejected("rate limited".into()));
    server.await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_transport_error() {
    let (url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let client = client_for(url, None);

    let err = client.correct(&CorrectionRequest::new("hola")).await.unwrap_err();
    assert!(matches!(err, CorrectionError::Status(500)), "{err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn api_key_is_sent_as_bearer_and_apikey() {
    let (url, server) = serve_once("200 OK", r#"{"correctedText":"Sí."}"#).await;
    let client = client_for(url, Some("anon-key"));

    client.correct(&CorrectionRequest::new("si")).await.unwrap();

    let request = server.await.unwrap().to_lowercase();
    assert!(request.contains("authorization: bearer anon-key"), "{request}");
    assert!(request.contains("apikey: anon-key"), "{request}");
}

// ---------------------------------------------------------------------------
// Orchestrator over HTTP
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Toasts(Mutex<Vec<Notification>>);

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

struct NoDownloads;

impl AssetDownloader for NoDownloads {
    fn download(&self, asset: &ReferenceAsset) -> Result<std::path::PathBuf, DownloadError> {
        Ok(asset.file_name.into())
    }
}

#[tokio::test]
async fn orchestrator_corrects_through_http() {
    let (url, server) =
        serve_once("200 OK", r#"{"correctedText":"Este es un texto con errores."}"#).await;
    let toasts = Arc::new(Toasts::default());
    let mut orchestrator = CorrectionOrchestrator::new(
        Arc::new(client_for(url, None)),
        toasts.clone(),
        Arc::new(NoClipboard),
        Arc::new(NoDownloads),
    );

    orchestrator.set_input("este es un texto con herorres");
    orchestrator.submit().await;

    assert_eq!(orchestrator.result(), Some("Este es un texto con errores."));
    assert_eq!(orchestrator.status(), RequestStatus::Succeeded);
    assert_eq!(
        toasts.0.lock().unwrap().last(),
        Some(&Notification::corrected())
    );
    server.await.unwrap();
}
