use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
  pub path: PathBuf,
  pub filename: String,
  pub chunk_filename: String,
  /// Clear the output directory before each build. The engine executes the
  /// clear; this crate only declares it.
  pub clean: bool,
}
