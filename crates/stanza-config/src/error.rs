//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during preset and configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Preset not found
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// Preset holds values the calculators cannot accept
    #[error("invalid preset values: {0}")]
    Validation(#[from] crate::validation::ValidationError),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn factories_produce_matching_variants() {
        let err = ConfigError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, ConfigError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );

        let err = ConfigError::write_file("/out/path", mock_io_err());
        assert!(
            matches!(err, ConfigError::WriteFile { ref path, .. } if path == std::path::Path::new("/out/path"))
        );

        let err = ConfigError::create_dir("/dir/path", mock_io_err());
        assert!(
            matches!(err, ConfigError::CreateDir { ref path, .. } if path == std::path::Path::new("/dir/path"))
        );
    }

    #[test]
    fn io_wrapping_variants_expose_source() {
        assert!(ConfigError::read_file("/x", mock_io_err()).source().is_some());
        assert!(ConfigError::write_file("/x", mock_io_err()).source().is_some());
        assert!(ConfigError::create_dir("/x", mock_io_err()).source().is_some());
        assert!(
            ConfigError::PresetNotFound("p".to_string())
                .source()
                .is_none()
        );
    }

    #[test]
    fn preset_not_found_display() {
        let err = ConfigError::PresetNotFound("attic".to_string());
        assert_eq!(err.to_string(), "preset not found: attic");
    }

    #[test]
    fn validation_error_converts() {
        let err: ConfigError = crate::validation::ValidationError::InvalidSoundSpeed {
            value: -1.0,
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("invalid preset values"), "got: {msg}");
        assert!(msg.contains("sound speed"), "got: {msg}");
    }
}
