pub mod dev_server_options;
pub mod module_rule;
pub mod optimization;
pub mod output_options;
pub mod overrides;
pub mod plugin;
pub mod resolve_options;
pub mod stats_options;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
  DevServerOptions, Mode, ModuleRule, Optimization, OutputOptions, PageDescriptor, Plugin,
  ResolveOptions, StatsOptions,
};

/// The declarative configuration handed to the external build engine.
///
/// Built fresh on every composition, never persisted. The plugin sequence is
/// order-sensitive: earlier plugins observe artifacts before later ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
  pub target: String,
  pub devtool: String,
  pub mode: Mode,
  /// Resolved project root. Forced by the composer, not overridable.
  pub context: PathBuf,
  pub resolve: ResolveOptions,
  pub stats: StatsOptions,
  pub dev_server: DevServerOptions,
  pub entry: IndexMap<String, String>,
  pub output: OutputOptions,
  pub module_rules: Vec<ModuleRule>,
  pub plugins: Vec<Plugin>,
  pub optimization: Optimization,
}

impl BuildConfig {
  pub fn html_pages(&self) -> impl Iterator<Item = &PageDescriptor> {
    self.plugins.iter().filter_map(|plugin| match plugin {
      Plugin::HtmlPage(page) => Some(page),
      _ => None,
    })
  }
}
