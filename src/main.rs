// SPDX-License-Identifier: MPL-2.0
use pixflow::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
PixFlow - browse time-limited photo events

USAGE:
  pixflow [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --backend-url <URL>    Events API base URL (default http://localhost:8000)
  --config-dir <DIR>     Directory holding settings.toml
  --data-dir <DIR>       Directory holding state.cbor
  -h, --help             Print this help

ENVIRONMENT:
  PIXFLOW_BACKEND_URL, PIXFLOW_CONFIG_DIR, PIXFLOW_DATA_DIR, RUST_LOG
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        backend_url: args.opt_value_from_str("--backend-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
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

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting PixFlow");
    app::run(flags)
}
