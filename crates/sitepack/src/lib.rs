mod composer;
mod merge;
mod pages;

pub use crate::{composer::Composer, merge::merge, pages::discover_pages};
pub use sitepack_common::*;
pub use sitepack_error::{ConfigError, ConfigResult};
