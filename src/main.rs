// SPDX-License-Identifier: MPL-2.0
use iced_pinch::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Pinch & Zoom

USAGE:
  iced_pinch [OPTIONS]

OPTIONS:
  -h, --help              Print this help
      --lang <ID>         UI language (e.g. en-US, fr)
      --config-dir <DIR>  Directory holding settings.toml
      --assets-dir <DIR>  Directory holding the page images

ENVIRONMENT:
  PINCH_CONFIG_DIR        Same as --config-dir
  PINCH_ASSETS_DIR        Same as --assets-dir
  RUST_LOG                Log filter (default: warn)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
