//! Static reference-file download.
//!
//! The application bundles one file, a standalone Flask + Gemini version of
//! the corrector, and offers it for download.  [`AssetDownloader`] is the
//! capability the orchestrator calls; [`FileAssetDownloader`] saves the file
//! into a directory the way a browser saves into "Downloads".

pub mod file;

pub use file::FileAssetDownloader;

use std::path::PathBuf;

use thiserror::Error;

/// A file compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceAsset {
    pub file_name: &'static str,
    pub contents: &'static [u8],
}

/// The reference implementation offered by the download button.
pub const REFERENCE_SCRIPT: ReferenceAsset = ReferenceAsset {
    file_name: "main.py",
    contents: include_bytes!("../../assets/main.py"),
};

/// Errors that can surface while saving an asset.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The destination could not be created or written.
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Delivers a bundled asset to the user.
pub trait AssetDownloader: Send + Sync {
    /// Save `asset`, returning where it ended up.
    fn download(&self, asset: &ReferenceAsset) -> Result<PathBuf, DownloadError>;
}
