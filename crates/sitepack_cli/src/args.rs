use std::path::PathBuf;

use clap::Args;

use crate::types::Mode;

#[derive(Args)]
pub struct ComposeArgs {
  /// Project root containing `src/pages`
  #[clap(long, default_value = ".")]
  pub root: PathBuf,

  #[clap(long, value_enum, default_value = "development")]
  pub mode: Mode,

  /// JSON file with configuration overrides
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Pretty-print the composed configuration
  #[clap(long)]
  pub pretty: bool,

  #[clap(long, short = 's')]
  pub silent: bool,
}
