use std::path::Path;

use sitepack_common::{Mode, PageDescriptor, TemplateParameters};
use sitepack_error::{ConfigError, ConfigResult};

/// Subdirectory scanned for page templates, relative to the project root.
pub const PAGES_DIR: &str = "src/pages";

/// The template glob is a crate constant, so a malformed pattern is a
/// programming error caught by tests, never a runtime condition.
pub const PAGES_PATTERN: &str = "*.pug";

const TEMPLATE_EXT: &str = ".pug";

/// Produces one descriptor per template file under `<root>/src/pages`,
/// sorted by file name so output ordering is reproducible across platforms.
///
/// A missing pages directory yields zero pages, not an error.
pub fn discover_pages(root: &Path, mode: Mode) -> ConfigResult<Vec<PageDescriptor>> {
  let pages_dir = root.join(PAGES_DIR);
  if !pages_dir.is_dir() {
    return Ok(Vec::new());
  }

  let entries = std::fs::read_dir(&pages_dir)
    .map_err(|error| ConfigError::configuration(&pages_dir, error.to_string()))?;

  let mut names = Vec::new();
  for entry in entries {
    let entry = entry.map_err(|error| ConfigError::configuration(&pages_dir, error.to_string()))?;
    if !entry.path().is_file() {
      continue;
    }
    if let Some(name) = entry.file_name().to_str() {
      if fast_glob::glob_match(PAGES_PATTERN, name) {
        names.push(name.to_string());
      }
    }
  }
  names.sort_unstable();

  let descriptors = names
    .into_iter()
    .map(|name| {
      let stem = name.strip_suffix(TEMPLATE_EXT).unwrap_or(&name);
      tracing::debug!("discovered page template `{name}`");
      PageDescriptor {
        template: format!("./{PAGES_DIR}/{name}").into(),
        filename: format!("./{stem}.html"),
        chunks: vec!["runtime".to_string(), "core".to_string()],
        inject: false,
        pretty: true,
        template_parameters: TemplateParameters::new(mode),
      }
    })
    .collect();

  Ok(descriptors)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  fn fixture(pages: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let pages_dir = dir.path().join(PAGES_DIR);
    fs::create_dir_all(&pages_dir).unwrap();
    for page in pages {
      fs::write(pages_dir.join(page), "extends layout\n").unwrap();
    }
    dir
  }

  #[test]
  fn one_descriptor_per_template_sorted_by_name() {
    let root = fixture(&["home.pug", "about.pug", "contact.pug"]);
    let pages = discover_pages(root.path(), Mode::Development).unwrap();

    let filenames: Vec<_> = pages.iter().map(|page| page.filename.as_str()).collect();
    assert_eq!(filenames, ["./about.html", "./contact.html", "./home.html"]);
    assert_eq!(pages[0].template, Path::new("./src/pages/about.pug"));
  }

  #[test]
  fn non_template_entries_are_skipped() {
    let root = fixture(&["home.pug", "notes.txt", "home.pug.bak"]);
    fs::create_dir(root.path().join(PAGES_DIR).join("partials")).unwrap();

    let pages = discover_pages(root.path(), Mode::Development).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].filename, "./home.html");
  }

  #[test]
  fn missing_pages_dir_yields_zero_pages() {
    let root = tempfile::tempdir().unwrap();
    let pages = discover_pages(root.path(), Mode::Production).unwrap();
    assert!(pages.is_empty());
  }

  #[test]
  fn descriptor_carries_mode_and_reserved_assets_slot() {
    let root = fixture(&["home.pug"]);
    let pages = discover_pages(root.path(), Mode::Production).unwrap();

    let params = &pages[0].template_parameters;
    assert_eq!(params.app_mode, Mode::Production);
    assert!(params.assets.is_empty());
    assert_eq!(pages[0].chunks, ["runtime", "core"]);
  }

  #[test]
  fn pattern_constant_is_well_formed() {
    assert!(fast_glob::glob_match(PAGES_PATTERN, "index.pug"));
    assert!(!fast_glob::glob_match(PAGES_PATTERN, "index.vue"));
  }
}
