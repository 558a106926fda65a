mod args;
mod types;

use std::time::Instant;

use ansi_term::Colour;
use args::{ComposeArgs, OutputArgs};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use sitepack::{BuildConfig, Composer};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  compose: ComposeArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn print_banner(mode: sitepack::Mode) {
  let dim = Colour::White.dimmed();
  eprintln!(
    "{} {}\n{}",
    Colour::Cyan.bold().paint("sitepack"),
    dim.paint(format!("({mode})")),
    dim.paint("composing build configuration...")
  );
}

fn print_pages(config: &BuildConfig) {
  let mut left = 0;
  let mut pages = Vec::new();

  for page in config.html_pages() {
    if page.filename.len() > left {
      left = page.filename.len();
    }
    pages.push((page.filename.clone(), page.template.display().to_string()));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, template) in pages {
    let filename_len = filename.len();
    eprintln!(
      "{}{:left$} {}{}",
      color.paint(filename),
      "",
      dim.paint("<- "),
      dim.paint(template),
      left = left - filename_len
    );
  }
}

fn read_overrides(args: &ComposeArgs) -> Result<Value, String> {
  let Some(path) = &args.config else {
    return Ok(Value::Object(serde_json::Map::new()));
  };
  let raw = std::fs::read_to_string(path)
    .map_err(|error| format!("failed to read `{}`: {error}", path.display()))?;
  serde_json::from_str(&raw)
    .map_err(|error| format!("failed to parse `{}`: {error}", path.display()))
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Commands::parse();
  let mode = sitepack::Mode::from(args.compose.mode);

  if !args.output.silent {
    print_banner(mode);
  }

  let overrides = match read_overrides(&args.compose) {
    Ok(overrides) => overrides,
    Err(message) => {
      eprintln!("{} {message}", Colour::Red.paint("Error:"));
      std::process::exit(1);
    }
  };

  let start = Instant::now();
  let composer = Composer::new(mode, &args.compose.root);
  match composer.compose_from_value(overrides) {
    Ok(config) => {
      let rendered = if args.output.pretty {
        serde_json::to_string_pretty(&config)
      } else {
        serde_json::to_string(&config)
      }
      .expect("configuration is always serializable");
      println!("{rendered}");

      if !args.output.silent {
        print_pages(&config);
        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        eprintln!(
          "{} Composed in {}",
          Colour::Green.paint("✔"),
          Colour::White.bold().paint(elapsed)
        );
      }
    }
    Err(error) => {
      eprintln!("{} {error}", Colour::Red.paint("Error:"));
      std::process::exit(1);
    }
  }
}
