use std::path::PathBuf;

use chrono::Utc;
use indexmap::IndexMap;
use serde_json::{Value, json};
use sugar_path::SugarPath;

use sitepack_common::{
  BuildConfig, CacheGroup, ConfigOverrides, CopyPattern, DevServerOptions, Loader, Mode,
  ModuleRule, Optimization, OutputOptions, Plugin, ResolveOptions, SplitChunks, StatsOptions,
};
use sitepack_error::{ConfigError, ConfigResult};

use crate::{merge::merge, pages::discover_pages};

/// Composes the build configuration for one project root and mode.
pub struct Composer {
  mode: Mode,
  root: PathBuf,
}

impl Composer {
  pub fn new(mode: Mode, root: impl Into<PathBuf>) -> Self {
    Self { mode, root: root.into().normalize() }
  }

  /// Builds the base configuration, applies the mode-specific additions and
  /// merges `overrides` on top. A pure function of (overrides, mode, root)
  /// apart from reading the template directory and the `BUILD_DATE`
  /// timestamp.
  pub fn compose(&self, overrides: ConfigOverrides) -> ConfigResult<BuildConfig> {
    if !self.root.is_dir() {
      return Err(ConfigError::configuration(&self.root, "root path does not exist"));
    }

    let mut config = self.base_config()?;

    if self.mode.is_production() {
      config.plugins.push(Plugin::BeautifyHtml { indent_size: 2, indent_char: ' ' });
      config.plugins.push(Plugin::ExitOnDone);
    }

    let config = merge(config, overrides);
    tracing::info!(
      mode = %self.mode,
      pages = config.html_pages().count(),
      plugins = config.plugins.len(),
      "composed build configuration"
    );
    Ok(config)
  }

  /// Like [`Self::compose`], taking the override fragment as raw JSON. A
  /// wrong-shape fragment fails with `ConfigError::Merge` before any merging
  /// happens.
  pub fn compose_from_value(&self, overrides: Value) -> ConfigResult<BuildConfig> {
    self.compose(ConfigOverrides::from_value(overrides)?)
  }

  fn base_config(&self) -> ConfigResult<BuildConfig> {
    let mut entry = IndexMap::new();
    entry.insert("core".to_string(), "./src/application/index.js".to_string());

    let mut alias = IndexMap::new();
    alias.insert("vue$".to_string(), "vue/dist/vue.esm.js".to_string());

    Ok(BuildConfig {
      target: self.mode.target().to_string(),
      devtool: "source-map".to_string(),
      mode: self.mode,
      context: self.root.clone(),
      resolve: ResolveOptions {
        extensions: vec![".js".to_string(), ".vue".to_string(), ".json".to_string()],
        alias,
      },
      stats: StatsOptions { all: false, errors: true, warnings: true, colors: true, entrypoints: true },
      dev_server: DevServerOptions {
        watch_extensions: vec![".pug".to_string()],
        message: "content-changed".to_string(),
      },
      entry,
      output: OutputOptions {
        path: self.root.join("dist"),
        filename: "[name].js".to_string(),
        chunk_filename: "[name].js".to_string(),
        clean: true,
      },
      module_rules: module_rules(),
      plugins: self.plugins()?,
      optimization: self.optimization(),
    })
  }

  fn plugins(&self) -> ConfigResult<Vec<Plugin>> {
    let title = self
      .root
      .file_name()
      .map_or_else(|| "SITE".to_string(), |name| name.to_string_lossy().to_uppercase());

    let mut definitions = IndexMap::new();
    definitions.insert("NODE_ENV".to_string(), json!(self.mode.to_string()));
    definitions.insert("BUILD_DATE".to_string(), json!(Utc::now().timestamp_millis()));

    let mut plugins = vec![
      Plugin::IconFont { source_dir: "src/assets/icons".to_string() },
      Plugin::CssExtract { filename: "[name].css".to_string() },
      Plugin::Notifier { title, emoji: true },
      Plugin::Progress { format: "compact".to_string() },
      Plugin::CopyAssets { patterns: copy_patterns() },
      Plugin::TemplateCompiler,
    ];
    plugins.extend(discover_pages(&self.root, self.mode)?.into_iter().map(Plugin::HtmlPage));
    plugins.push(Plugin::DefineConstants { definitions });

    Ok(plugins)
  }

  fn optimization(&self) -> Optimization {
    let mut cache_groups = IndexMap::new();
    if self.mode.is_production() {
      cache_groups.insert(
        "vendors".to_string(),
        CacheGroup {
          test: "node_modules".to_string(),
          name: "vendors".to_string(),
          chunks: "all".to_string(),
        },
      );
    }

    Optimization {
      minimize: self.mode.is_production(),
      runtime_chunk: "runtime".to_string(),
      split_chunks: self
        .mode
        .is_production()
        .then(|| SplitChunks { chunks: "all".to_string(), cache_groups }),
    }
  }
}

fn module_rules() -> Vec<ModuleRule> {
  vec![
    ModuleRule {
      test: r"\.vue$".to_string(),
      include: Some("./src".to_string()),
      exclude: None,
      handlers: vec![Loader::new("vue-loader")],
    },
    ModuleRule {
      test: r"\.js$".to_string(),
      include: None,
      exclude: Some("node_modules".to_string()),
      handlers: vec![Loader::new("babel-loader"), Loader::new("eslint-loader")],
    },
    ModuleRule {
      test: r"\.pug$".to_string(),
      include: None,
      exclude: None,
      handlers: vec![Loader::new("pug-loader").with_option("root", "./src")],
    },
    ModuleRule {
      test: r"\.scss$".to_string(),
      include: None,
      exclude: None,
      handlers: vec![
        Loader::new("css-extract-loader").with_option("publicPath", "dist/"),
        Loader::new("css-loader"),
        Loader::new("resolve-url-loader"),
        Loader::new("sass-loader"),
        Loader::new("sass-resources-loader")
          .with_option("resources", "src/styles/_resources.scss"),
      ],
    },
    ModuleRule {
      test: r"\.css$".to_string(),
      include: None,
      exclude: None,
      handlers: vec![Loader::new("css-extract-loader"), Loader::new("css-loader")],
    },
    ModuleRule {
      test: r"\.(png|svg|jpg|jpeg|gif)$".to_string(),
      include: None,
      exclude: None,
      handlers: vec![Loader::new("url-loader").with_option("limit", 8192).with_option(
        "fallback",
        json!({
          "loader": "file-loader",
          "options": { "name": "[name].[ext]", "outputPath": "images/", "publicPath": "images/" }
        }),
      )],
    },
    ModuleRule {
      test: r"\.(woff2)$".to_string(),
      include: None,
      exclude: None,
      handlers: vec![
        Loader::new("file-loader").with_option("name", "[name].[ext]?ver=[contenthash]"),
      ],
    },
  ]
}

fn copy_patterns() -> Vec<CopyPattern> {
  [
    ("src/components/**/images/*.*", "images/[name][ext]"),
    ("src/assets/images/*.*", "images/[name][ext]"),
    ("src/assets/json/*.json", "json/[name][ext]"),
    ("src/assets/misc/*.*", "json/[name][ext]"),
  ]
  .into_iter()
  .map(|(from, to)| CopyPattern {
    from: from.to_string(),
    to: to.to_string(),
    no_error_on_missing: true,
  })
  .collect()
}
