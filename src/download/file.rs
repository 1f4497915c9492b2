//! Saves bundled assets into a directory on disk.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{AssetDownloader, DownloadError, ReferenceAsset};

/// Writes assets into `target_dir`, never overwriting an existing file:
/// `main.py` becomes `main (1).py`, `main (2).py`, … like a browser download.
#[derive(Debug, Clone)]
pub struct FileAssetDownloader {
    target_dir: PathBuf,
}

impl FileAssetDownloader {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Candidate paths for `file_name`: the plain name, then `stem (n).ext`.
    fn candidates<'a>(&'a self, file_name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        let path = Path::new(file_name);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        let ext = path.extension().and_then(|e| e.to_str());

        std::iter::once(self.target_dir.join(file_name)).chain((1u32..).map(move |n| {
            let name = match ext {
                Some(ext) => format!("{stem} ({n}).{ext}"),
                None => format!("{stem} ({n})"),
            };
            self.target_dir.join(name)
        }))
    }
}

impl AssetDownloader for FileAssetDownloader {
    fn download(&self, asset: &ReferenceAsset) -> Result<PathBuf, DownloadError> {
        std::fs::create_dir_all(&self.target_dir).map_err(|source| DownloadError::Io {
            path: self.target_dir.clone(),
            source,
        })?;

        for path in self.candidates(asset.file_name) {
            // `create_new` fails instead of truncating a file that appeared
            // after the name was picked.
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(source) => return Err(DownloadError::Io { path, source }),
            };

            file.write_all(asset.contents)
                .map_err(|source| DownloadError::Io {
                    path: path.clone(),
                    source,
                })?;

            log::info!("Saved {} to {}", asset.file_name, path.display());
            return Ok(path);
        }

        Err(DownloadError::Io {
            path: self.target_dir.join(asset.file_name),
            source: ErrorKind::AlreadyExists.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ASSET: ReferenceAsset = ReferenceAsset {
        file_name: "main.py",
        contents: b"print('hola')\n",
    };

    #[test]
    fn writes_asset_contents() {
        let dir = tempdir().expect("temp dir");
        let downloader = FileAssetDownloader::new(dir.path());

        let path = downloader.download(&ASSET).expect("download");
        assert_eq!(path, dir.path().join("main.py"));
        assert_eq!(std::fs::read(&path).unwrap(), ASSET.contents);
    }

    #[test]
    fn creates_missing_target_dir() {
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("a").join("b");
        let downloader = FileAssetDownloader::new(&target);

        let path = downloader.download(&ASSET).expect("download");
        assert!(path.starts_with(&target));
        assert!(path.exists());
    }

    #[test]
    fn never_overwrites_existing_files() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("main.py"), "mine").unwrap();
        let downloader = FileAssetDownloader::new(dir.path());

        let first = downloader.download(&ASSET).expect("first");
        let second = downloader.download(&ASSET).expect("second");

        assert_eq!(first, dir.path().join("main (1).py"));
        assert_eq!(second, dir.path().join("main (2).py"));
        assert_eq!(std::fs::read_to_string(dir.path().join("main.py")).unwrap(), "mine");
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let downloader = FileAssetDownloader::new(blocker.join("sub"));

        assert!(matches!(
            downloader.download(&ASSET),
            Err(DownloadError::Io { .. })
        ));
    }

    #[test]
    fn numbered_names_skip_every_taken_slot() {
        let dir = tempdir().expect("temp dir");
        for name in ["main.py", "main (1).py", "main (2).py"] {
            std::fs::write(dir.path().join(name), name).unwrap();
        }
        let downloader = FileAssetDownloader::new(dir.path());

        let path = downloader.download(&ASSET).expect("download");

        assert_eq!(path, dir.path().join("main (3).py"));
        for name in ["main.py", "main (1).py", "main (2).py"] {
            assert_eq!(std::fs::read_to_string(dir.path().join(name)).unwrap(), name);
        }
    }

    #[test]
    fn files_without_extension_get_numbered_too() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("LICENSE"), "mine").unwrap();
        let downloader = FileAssetDownloader::new(dir.path());
        let asset = ReferenceAsset {
            file_name: "LICENSE",
            contents: b"MIT",
        };

        let path = downloader.download(&asset).expect("download");

        assert_eq!(path, dir.path().join("LICENSE (1)"));
        assert_eq!(std::fs::read_to_string(dir.path().join("LICENSE")).unwrap(), "mine");
    }
}
