//! Whole-file reads

use std::path::Path;
use tokio::fs;

use crate::error::DispatchError;

/// Read a file's full contents.
///
/// `request_path` is the raw request path, carried into the error so the
/// rendered page names what the client asked for.
pub async fn read_all(file: &Path, request_path: &str) -> Result<Vec<u8>, DispatchError> {
    fs::read(file)
        .await
        .map_err(|source| DispatchError::NotReadable {
            path: request_path.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_exact_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, [0u8, 159, 146, 150]).unwrap();

        let bytes = read_all(&path, "/data.bin").await.unwrap();
        assert_eq!(bytes, [0u8, 159, 146, 150]);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_readable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent");

        let err = read_all(&path, "/absent").await.unwrap_err();
        assert!(matches!(err, DispatchError::NotReadable { .. }));
        assert!(err.to_string().contains("/absent"));
    }
}
