mod build_config;
mod mode;
mod page;

pub use crate::{
  build_config::{
    BuildConfig,
    dev_server_options::DevServerOptions,
    module_rule::{Loader, ModuleRule},
    optimization::{CacheGroup, Optimization, SplitChunks},
    output_options::OutputOptions,
    overrides::ConfigOverrides,
    plugin::{CopyPattern, Plugin},
    resolve_options::ResolveOptions,
    stats_options::StatsOptions,
  },
  mode::Mode,
  page::{PageDescriptor, TemplateParameters},
};
