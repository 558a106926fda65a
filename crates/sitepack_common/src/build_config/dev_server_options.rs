use serde::{Deserialize, Serialize};

/// Dev-time notification channel. When a changed file matches one of the
/// watched extensions, `message` is pushed to connected clients to signal a
/// content change, as opposed to a full reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
  pub watch_extensions: Vec<String>,
  pub message: String,
}
