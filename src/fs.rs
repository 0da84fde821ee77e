//! File-system adapters.
//!
//! Thin effects over `tokio::fs`. Every failure is an [`FsError`] naming the
//! operation and the path involved. File handles close when dropped.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::File;

use crate::effect::prelude::*;
use crate::stream::{self, ByteSource};

/// A failed file-system operation.
#[derive(Debug, thiserror::Error)]
#[error("{problem}: {}", .path.display())]
pub struct FsError {
    /// What was being attempted.
    pub problem: &'static str,
    /// The path the operation was applied to.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: io::Error,
}

impl FsError {
    fn new(problem: &'static str, path: &Path, source: io::Error) -> Self {
        FsError {
            problem,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A fresh path in the OS temp directory. Nothing is created on disk.
pub fn temp_file_path() -> PathBuf {
    std::env::temp_dir().join(uuid::Uuid::new_v4().to_string())
}

/// Open `path` for reading as a [`ByteSource`].
pub fn create_read_stream<Env>(
    path: impl Into<PathBuf>,
) -> impl Effect<Output = ByteSource, Error = FsError, Env = Env>
where
    Env: Clone + Send + Sync,
{
    let path = path.into();
    from_async(move |_: &Env| async move {
        let file = File::open(&path)
            .await
            .map_err(|e| FsError::new("Failed to open file for reading", &path, e))?;
        Ok(stream::from_reader(file))
    })
}

/// Create (or truncate) `path` and open it for writing.
pub fn create_write_stream<Env>(
    path: impl Into<PathBuf>,
) -> impl Effect<Output = File, Error = FsError, Env = Env>
where
    Env: Clone + Send + Sync,
{
    let path = path.into();
    from_async(move |_: &Env| async move {
        File::create(&path)
            .await
            .map_err(|e| FsError::new("Failed to open file for writing", &path, e))
    })
}

/// Create `path` and every missing parent. Succeeds if it already exists.
pub fn create_dir_all<Env>(path: impl Into<PathBuf>) -> impl Effect<Output = (), Error = FsError, Env = Env>
where
    Env: Clone + Send + Sync,
{
    let path = path.into();
    from_async(move |_: &Env| async move {
        tokio::fs::create_dir_all(&path)
            .await
            .map_err(|e| FsError::new("Failed to create directory", &path, e))
    })
}

/// Entries of the directory at `path`, sorted.
pub fn read_dir<Env>(path: impl Into<PathBuf>) -> impl Effect<Output = Vec<PathBuf>, Error = FsError, Env = Env>
where
    Env: Clone + Send + Sync,
{
    let path = path.into();
    from_async(move |_: &Env| async move {
        let error = |e| FsError::new("Failed to read directory", &path, e);
        let mut entries = tokio::fs::read_dir(&path).await.map_err(error)?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(error)? {
            paths.push(entry.path());
        }
        paths.sort();
        Ok(paths)
    })
}

/// Copy the file at `from` to `to`, overwriting `to`.
pub fn copy_file<Env>(
    from: impl Into<PathBuf>,
    to: impl Into<PathBuf>,
) -> impl Effect<Output = (), Error = FsError, Env = Env>
where
    Env: Clone + Send + Sync,
{
    let (from, to) = (from.into(), to.into());
    from_async(move |_: &Env| async move {
        tokio::fs::copy(&from, &to)
            .await
            .map(|_| ())
            .map_err(|e| FsError::new("Failed to copy file", &from, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{fold_string, pipe};

    #[test]
    fn test_temp_file_paths_are_unique() {
        let (a, b) = (temp_file_path(), temp_file_path());
        assert_ne!(a, b);
        assert!(a.starts_with(std::env::temp_dir()));
    }

    #[tokio::test]
    async fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");

        let source = stream::create("written through a pipe").start().await;
        create_write_stream::<()>(&path)
            .map_err(|e| e.to_string())
            .and_then(|file| pipe(source, file).map_err(|e| e.to_string()))
            .run(&())
            .await
            .unwrap();

        let text = create_read_stream::<()>(&path)
            .map_err(|e| e.to_string())
            .and_then(|source| fold_string(source).map_err(|e| e.to_string()))
            .run(&())
            .await
            .unwrap();
        assert_eq!(text, "written through a pipe");
    }

    #[tokio::test]
    async fn test_read_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");

        let error = match create_read_stream::<()>(&path).run(&()).await {
            Ok(_) => panic!("opened a file that does not exist"),
            Err(error) => error,
        };
        assert_eq!(error.path, path);
        assert_eq!(error.source.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_dirs_and_copy() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        create_dir_all::<()>(&nested).run(&()).await.unwrap();
        create_dir_all::<()>(&nested).run(&()).await.unwrap();

        tokio::fs::write(nested.join("one"), "1").await.unwrap();
        copy_file::<()>(nested.join("one"), nested.join("two"))
            .run(&())
            .await
            .unwrap();

        let entries = read_dir::<()>(&nested).run(&()).await.unwrap();
        assert_eq!(entries, vec![nested.join("one"), nested.join("two")]);
        assert_eq!(tokio::fs::read_to_string(nested.join("two")).await.unwrap(), "1");
    }
}
