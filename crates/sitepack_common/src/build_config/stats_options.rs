use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOptions {
  pub all: bool,
  pub errors: bool,
  pub warnings: bool,
  pub colors: bool,
  pub entrypoints: bool,
}
