use sitepack_common::{BuildConfig, ConfigOverrides};

/// Applies a user override fragment on top of the composed base.
///
/// Scalar and map-shaped fields (`target`, `devtool`, `output`, `resolve`,
/// `stats`, `dev_server`, `optimization`) replace the base value. `entry`
/// merges per key with the override key winning. `module_rules` and
/// `plugins` concatenate after the base sequence, so overrides can extend
/// but never remove base entries. `context` and `mode` stay owned by the
/// composer.
pub fn merge(mut base: BuildConfig, overrides: ConfigOverrides) -> BuildConfig {
  if let Some(target) = overrides.target {
    base.target = target;
  }
  if let Some(devtool) = overrides.devtool {
    base.devtool = devtool;
  }
  if let Some(entry) = overrides.entry {
    for (name, import) in entry {
      base.entry.insert(name, import);
    }
  }
  if let Some(output) = overrides.output {
    base.output = output;
  }
  if let Some(resolve) = overrides.resolve {
    base.resolve = resolve;
  }
  if let Some(stats) = overrides.stats {
    base.stats = stats;
  }
  if let Some(dev_server) = overrides.dev_server {
    base.dev_server = dev_server;
  }
  if let Some(optimization) = overrides.optimization {
    base.optimization = optimization;
  }
  base.module_rules.extend(overrides.module_rules);
  base.plugins.extend(overrides.plugins);
  base
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use indexmap::IndexMap;
  use sitepack_common::{
    DevServerOptions, Loader, Mode, ModuleRule, Optimization, OutputOptions, Plugin,
    ResolveOptions, StatsOptions,
  };

  use super::*;

  fn sample_config() -> BuildConfig {
    let mut entry = IndexMap::new();
    entry.insert("core".to_string(), "./src/application/index.js".to_string());

    BuildConfig {
      target: "web".to_string(),
      devtool: "source-map".to_string(),
      mode: Mode::Development,
      context: PathBuf::from("/project"),
      resolve: ResolveOptions { extensions: vec![".js".to_string()], alias: IndexMap::new() },
      stats: StatsOptions { all: false, errors: true, warnings: true, colors: true, entrypoints: true },
      dev_server: DevServerOptions {
        watch_extensions: vec![".pug".to_string()],
        message: "content-changed".to_string(),
      },
      entry,
      output: OutputOptions {
        path: PathBuf::from("/project/dist"),
        filename: "[name].js".to_string(),
        chunk_filename: "[name].js".to_string(),
        clean: true,
      },
      module_rules: vec![ModuleRule {
        test: r"\.js$".to_string(),
        include: None,
        exclude: None,
        handlers: vec![Loader::new("babel-loader")],
      }],
      plugins: vec![Plugin::TemplateCompiler],
      optimization: Optimization {
        minimize: false,
        runtime_chunk: "runtime".to_string(),
        split_chunks: None,
      },
    }
  }

  #[test]
  fn empty_overrides_leave_base_untouched() {
    let base = sample_config();
    let merged = merge(base.clone(), ConfigOverrides::default());
    assert_eq!(merged, base);
  }

  #[test]
  fn scalars_replace() {
    let overrides =
      ConfigOverrides { devtool: Some("eval".to_string()), ..ConfigOverrides::default() };
    let merged = merge(sample_config(), overrides);
    assert_eq!(merged.devtool, "eval");
  }

  #[test]
  fn entry_merges_per_key_with_override_winning() {
    let mut entry = IndexMap::new();
    entry.insert("core".to_string(), "./src/other.js".to_string());
    entry.insert("admin".to_string(), "./src/admin.js".to_string());

    let merged =
      merge(sample_config(), ConfigOverrides { entry: Some(entry), ..ConfigOverrides::default() });
    assert_eq!(merged.entry["core"], "./src/other.js");
    assert_eq!(merged.entry["admin"], "./src/admin.js");
    assert_eq!(merged.entry.len(), 2);
  }

  #[test]
  fn sequences_concatenate_after_base() {
    let overrides = ConfigOverrides {
      plugins: vec![Plugin::ExitOnDone],
      module_rules: vec![ModuleRule {
        test: r"\.ts$".to_string(),
        include: None,
        exclude: None,
        handlers: vec![Loader::new("ts-loader")],
      }],
      ..ConfigOverrides::default()
    };

    let base = sample_config();
    let merged = merge(base.clone(), overrides);
    assert_eq!(merged.plugins[0], base.plugins[0]);
    assert!(matches!(merged.plugins.last(), Some(Plugin::ExitOnDone)));
    assert_eq!(merged.module_rules.len(), base.module_rules.len() + 1);
  }
}
