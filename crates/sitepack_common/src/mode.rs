use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Build profile selecting development vs. production behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Development,
  Production,
}

impl Mode {
  #[inline]
  pub fn is_production(&self) -> bool {
    matches!(self, Self::Production)
  }

  /// Compilation target declared to the build engine.
  pub fn target(&self) -> &'static str {
    match self {
      Self::Development => "web",
      Self::Production => "browserslist",
    }
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

#[test]
fn test_mode_display() {
  assert_eq!(Mode::Development.to_string(), "development");
  assert_eq!(Mode::Production.to_string(), "production");
  assert!(!Mode::Development.is_production());
}
