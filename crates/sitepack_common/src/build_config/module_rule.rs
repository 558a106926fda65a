use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A file pattern paired with an ordered handler chain. Handler order within
/// a rule is significant: later handlers receive the output of earlier ones.
/// Rule order across the sequence is not, since patterns are mutually
/// exclusive by extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRule {
  pub test: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub include: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exclude: Option<String>,
  #[serde(rename = "use")]
  pub handlers: Vec<Loader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loader {
  pub name: String,
  #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
  pub options: IndexMap<String, Value>,
}

impl Loader {
  pub fn new(name: &str) -> Self {
    Self { name: name.to_string(), options: IndexMap::new() }
  }

  pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
    self.options.insert(key.to_string(), value.into());
    self
  }
}

#[test]
fn test_loader_options_keep_insertion_order() {
  let loader = Loader::new("sass-loader").with_option("b", 1).with_option("a", 2);
  let keys: Vec<_> = loader.options.keys().cloned().collect();
  assert_eq!(keys, ["b", "a"]);
}
