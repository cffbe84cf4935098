// SPDX-License-Identifier: MPL-2.0
use iced_compare::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Before/after image comparison slider

USAGE:
  iced_compare [OPTIONS] [BEFORE] [AFTER]

ARGS:
  <BEFORE>                Image shown under the divider
  <AFTER>                 Image revealed left of the divider

OPTIONS:
  --before-label <TEXT>   Label for the before image
  --after-label <TEXT>    Label for the after image
  --height <PX>           Slider height in logical pixels
  --no-auto-demo          Disable the reveal animation
  --lead-in <PX>          Empty space above the slider
  --lang <LOCALE>         Interface language (e.g. en-US, de, fr)
  --config-dir <DIR>      Directory holding settings.toml
  -h, --help              Print this help

Images that are not given on the command line can be picked in the window.
Log verbosity follows RUST_LOG (default: info).
";

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let mut flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        before_label: args.opt_value_from_str("--before-label")?,
        after_label: args.opt_value_from_str("--after-label")?,
        height: args.opt_value_from_str("--height")?,
        no_auto_demo: args.contains("--no-auto-demo"),
        lead_in: args.opt_value_from_str("--lead-in")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        ..Flags::default()
    };

    let mut paths = args.finish().into_iter().map(PathBuf::from);
    flags.before = paths.next();
    flags.after = paths.next();
    for extra in paths {
        tracing::warn!(path = %extra.display(), "ignoring extra argument");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::debug!(?flags, "starting");
    app::run(flags)
}
