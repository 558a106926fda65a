use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Mode {
  Development,
  Production,
}

impl From<Mode> for sitepack::Mode {
  fn from(value: Mode) -> Self {
    match value {
      Mode::Development => sitepack::Mode::Development,
      Mode::Production => sitepack::Mode::Production,
    }
  }
}
