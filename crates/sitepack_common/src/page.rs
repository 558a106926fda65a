use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Mode;

/// One output document rendered by the build engine. Created once per
/// discovered template file and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
  pub template: PathBuf,
  pub filename: String,
  pub chunks: Vec<String>,
  pub inject: bool,
  pub pretty: bool,
  pub template_parameters: TemplateParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateParameters {
  pub app_mode: Mode,
  /// Render-time asset mapping. Only the slot is reserved here; the build
  /// engine fills it while rendering each page.
  #[serde(default)]
  pub assets: IndexMap<String, Value>,
}

impl TemplateParameters {
  pub fn new(mode: Mode) -> Self {
    Self { app_mode: mode, assets: IndexMap::new() }
  }
}
