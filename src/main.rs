// SPDX-License-Identifier: MPL-2.0
use issue2md_console::app::{self, config, paths, Flags};
use issue2md_console::logging;

const HELP: &str = "\
Issue2MD control console

USAGE:
  issue2md-console [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          Interface language (e.g. en-US, zh-CN)
  --config-dir <DIR>       Directory holding settings.toml
  --log-level <FILTER>     Log filter when RUST_LOG is unset (e.g. debug)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    // The log level may come from the config file, so peek at it before the
    // application loads it for real.
    let level = flags
        .log_level
        .clone()
        .or_else(|| config::load().0.logging.level);
    if let Err(err) = logging::init(level.as_deref()) {
        eprintln!("Failed to initialize logging: {err}");
    }

    app::run(flags)
}
