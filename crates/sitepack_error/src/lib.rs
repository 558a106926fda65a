use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The composition root is unusable. Fatal: no partial configuration is
  /// ever returned.
  #[error("invalid root path `{}`: {reason}", path.display())]
  Configuration { path: PathBuf, reason: String },

  /// A user override fragment did not match the configuration schema.
  #[error("malformed override fragment: {0}")]
  Merge(#[from] serde_json::Error),
}

impl ConfigError {
  pub fn configuration(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
    Self::Configuration { path: path.into(), reason: reason.into() }
  }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
