//! Error types for annuaire

use thiserror::Error;

/// Main error type for the annuaire library and CLI
///
/// The content repository never produces these: absent content is an empty
/// result, not an error. They come from configuration, serialization and
/// CLI lookups that must produce output.
#[derive(Debug, Error)]
pub enum AnnuaireError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid content path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnnuaireError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnnuaireError::Config(_) => 2,
            AnnuaireError::InvalidPath(_) => 3,
            AnnuaireError::NotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            AnnuaireError::NotFound(path) => {
                format!(
                    "Not found: '{}'\n\n\
                    Suggestions:\n\
                    • Paths look like category/region/city/listing (no extension)\n\
                    • Use 'annuaire listings <category> <region> <city>' to see listing ids\n\
                    • Directory names are matched exactly, including case",
                    path
                )
            }
            AnnuaireError::InvalidPath(path) => {
                format!(
                    "Invalid content path: '{}'\n\n\
                    Path segments must be non-empty, may not start with '.' and may not contain '/' or '\\'\n\
                    Example: annuaire show restaurants/Ile-de-France/Paris/le-bistro",
                    path
                )
            }
            AnnuaireError::Config(msg) => {
                if msg.contains("items_per_page") {
                    format!(
                        "{}\n\n\
                        items_per_page must be a positive integer\n\
                        Example: items_per_page = 20",
                        msg
                    )
                } else if msg.contains("already initialized") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Edit the existing directory.toml instead\n\
                        • Run 'annuaire init' in an empty directory",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using AnnuaireError
pub type Result<T> = std::result::Result<T, AnnuaireError>;
