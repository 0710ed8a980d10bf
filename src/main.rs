// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toasts gallery

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <PATH>     Directory holding settings.toml
  --theme <MODE>          light, dark or system

ENVIRONMENT:
  ICED_TOASTS_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                Log filter (default: iced_toasts=info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toasts=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_str::<_, ThemeMode>("--theme")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(flags)
}
