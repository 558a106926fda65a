use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
  pub minimize: bool,
  pub runtime_chunk: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub split_chunks: Option<SplitChunks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
  pub chunks: String,
  pub cache_groups: IndexMap<String, CacheGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheGroup {
  pub test: String,
  pub name: String,
  pub chunks: String,
}
