use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::PageDescriptor;

/// A unit of build-lifecycle behavior. The external build engine dispatches
/// on `kind`; this crate only declares the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Plugin {
  IconFont { source_dir: String },
  CssExtract { filename: String },
  Notifier { title: String, emoji: bool },
  Progress { format: String },
  CopyAssets { patterns: Vec<CopyPattern> },
  TemplateCompiler,
  HtmlPage(PageDescriptor),
  DefineConstants { definitions: IndexMap<String, Value> },
  BeautifyHtml { indent_size: u8, indent_char: char },
  /// Signals the engine to end the process once a one-shot build completes.
  /// Declarative only; nothing here touches process control.
  ExitOnDone,
}

impl Plugin {
  pub fn kind(&self) -> &'static str {
    match self {
      Self::IconFont { .. } => "icon-font",
      Self::CssExtract { .. } => "css-extract",
      Self::Notifier { .. } => "notifier",
      Self::Progress { .. } => "progress",
      Self::CopyAssets { .. } => "copy-assets",
      Self::TemplateCompiler => "template-compiler",
      Self::HtmlPage(_) => "html-page",
      Self::DefineConstants { .. } => "define-constants",
      Self::BeautifyHtml { .. } => "beautify-html",
      Self::ExitOnDone => "exit-on-done",
    }
  }
}

/// Copying a pattern whose source does not exist is tolerated when
/// `no_error_on_missing` is set; the engine skips it silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyPattern {
  pub from: String,
  pub to: String,
  pub no_error_on_missing: bool,
}

#[test]
fn test_plugin_kind_matches_wire_tag() {
  let value = serde_json::to_value(&Plugin::ExitOnDone).unwrap();
  assert_eq!(value["kind"], Plugin::ExitOnDone.kind());
}
