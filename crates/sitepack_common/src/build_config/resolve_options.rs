use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
  pub extensions: Vec<String>,
  #[serde(default)]
  pub alias: IndexMap<String, String>,
}
