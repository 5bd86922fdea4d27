use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use clicksteer_interface::{async_trait, FrameSource, RawFrame};
use fs_err as fs;
use tracing::{debug, warn};

use crate::Error;

const FRAME_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Replays the image files of a directory as compressed frames.
///
/// Files are delivered in file name order, one per `period`. Decoding is
/// left to the frame consumer.
#[derive(Debug)]
pub struct DirectoryFrameSource {
    files: Vec<PathBuf>,
    period: Duration,
    looping: bool,
    next_index: Mutex<usize>,
}

impl DirectoryFrameSource {
    pub fn new(dir: impl AsRef<Path>, period: Duration, looping: bool) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let mut files: Vec<_> = fs::read_dir(dir)
            .map_err(|e| Error::NoFile(dir.to_owned(), e))?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_frame_file(path))
            .collect();
        if files.is_empty() {
            return Err(Error::NoFrames(dir.to_owned()));
        }
        files.sort();
        debug!("{} frame files in {dir:?}", files.len());
        Ok(Self {
            files,
            period,
            looping,
            next_index: Mutex::new(0),
        })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn next_path(&self) -> Option<PathBuf> {
        let mut index = self.next_index.lock().unwrap();
        if *index >= self.files.len() {
            if !self.looping {
                return None;
            }
            *index = 0;
        }
        let path = self.files[*index].clone();
        *index += 1;
        Some(path)
    }
}

fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| FRAME_EXTENSIONS.contains(&ext.as_str()))
}

#[async_trait]
impl FrameSource for DirectoryFrameSource {
    async fn next_frame(&self) -> Option<RawFrame> {
        // give up after one full pass of unreadable files
        for _ in 0..self.files.len() {
            let path = self.next_path()?;
            tokio::time::sleep(self.period).await;
            match tokio::fs::read(&path).await {
                Ok(data) => return Some(RawFrame::compressed(data)),
                Err(e) => warn!("failed to read frame {path:?}: {e}"),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in [
            ("b.png", &b"second"[..]),
            ("a.PNG", &b"first"[..]),
            ("notes.txt", &b"ignored"[..]),
            ("c.jpg", &b"third"[..]),
        ] {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[tokio::test(start_paused = true)]
    async fn test_once() {
        let dir = frames_dir();
        let source =
            DirectoryFrameSource::new(dir.path(), Duration::from_millis(100), false).unwrap();
        assert_eq!(source.files().len(), 3);
        for expected in [&b"first"[..], &b"second"[..], &b"third"[..]] {
            assert_eq!(source.next_frame().await.unwrap().data, expected);
        }
        assert!(source.next_frame().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_looping() {
        let dir = frames_dir();
        let source =
            DirectoryFrameSource::new(dir.path(), Duration::from_millis(100), true).unwrap();
        for _ in 0..3 {
            source.next_frame().await.unwrap();
        }
        assert_eq!(source.next_frame().await.unwrap().data, b"first");
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DirectoryFrameSource::new(dir.path(), Duration::ZERO, true),
            Err(Error::NoFrames(_))
        ));
        assert!(matches!(
            DirectoryFrameSource::new(dir.path().join("missing"), Duration::ZERO, true),
            Err(Error::NoFile(..))
        ));
    }
}
