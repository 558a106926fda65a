use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use sitepack_error::ConfigResult;

use crate::{
  DevServerOptions, ModuleRule, Optimization, OutputOptions, Plugin, ResolveOptions, StatsOptions,
};

/// A caller-supplied configuration fragment, merged on top of the composed
/// base.
///
/// Merge policy per field:
/// - replace the base value: `target`, `devtool`, `output`, `resolve`,
///   `stats`, `dev_server`, `optimization`
/// - union per key, override key wins: `entry`
/// - concatenate after the base sequence: `module_rules`, `plugins`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
  #[serde(default)]
  pub target: Option<String>,
  #[serde(default)]
  pub devtool: Option<String>,
  #[serde(default)]
  pub entry: Option<IndexMap<String, String>>,
  #[serde(default)]
  pub output: Option<OutputOptions>,
  #[serde(default)]
  pub resolve: Option<ResolveOptions>,
  #[serde(default)]
  pub stats: Option<StatsOptions>,
  #[serde(default)]
  pub dev_server: Option<DevServerOptions>,
  #[serde(default)]
  pub optimization: Option<Optimization>,
  #[serde(default)]
  pub module_rules: Vec<ModuleRule>,
  #[serde(default)]
  pub plugins: Vec<Plugin>,
}

impl ConfigOverrides {
  /// Parses a raw override fragment. A fragment of the wrong shape is a
  /// `ConfigError::Merge`; unknown keys are rejected rather than silently
  /// dropped.
  pub fn from_value(value: Value) -> ConfigResult<Self> {
    Ok(serde_json::from_value(value)?)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use sitepack_error::ConfigError;

  use super::ConfigOverrides;

  #[test]
  fn parses_partial_fragment() {
    let overrides =
      ConfigOverrides::from_value(json!({ "devtool": "eval", "entry": { "admin": "./src/admin.js" } }))
        .unwrap();
    assert_eq!(overrides.devtool.as_deref(), Some("eval"));
    assert_eq!(overrides.entry.unwrap()["admin"], "./src/admin.js");
    assert!(overrides.plugins.is_empty());
  }

  #[test]
  fn rejects_unknown_keys() {
    let result = ConfigOverrides::from_value(json!({ "entryPoints": {} }));
    assert!(matches!(result, Err(ConfigError::Merge(_))));
  }

  #[test]
  fn rejects_wrong_shape() {
    let result = ConfigOverrides::from_value(json!({ "plugins": 42 }));
    assert!(matches!(result, Err(ConfigError::Merge(_))));
  }
}
