use crate::core::TextSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_path;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalTextSource {
    base_path: Option<PathBuf>,
}

impl LocalTextSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 相對路徑以 base_path 為根目錄
    pub fn with_base_path<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    fn resolve(&self, locator: &str) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(locator),
            None => Path::new(locator).to_path_buf(),
        }
    }
}

impl TextSource for LocalTextSource {
    async fn read_text(&self, locator: &str) -> Result<String> {
        validate_path("locator", locator)?;
        let full_path = self.resolve(locator);
        tracing::debug!("Reading text file: {}", full_path.display());

        let text = tokio::fs::read_to_string(&full_path).await?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DrillError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_relative_to_base_path() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("poem.txt"), "Roses are red").unwrap();

        let source = LocalTextSource::with_base_path(temp_dir.path());
        assert_eq!(source.read_text("poem.txt").await.unwrap(), "Roses are red");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = LocalTextSource::with_base_path(temp_dir.path());

        let err = source.read_text("missing.txt").await.unwrap_err();
        assert!(matches!(err, DrillError::IoError(_)));
    }

    #[tokio::test]
    async fn test_empty_locator_rejected() {
        let err = LocalTextSource::new().read_text("").await.unwrap_err();
        assert!(matches!(err, DrillError::InvalidConfigValueError { .. }));
    }
}
