// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};

const HELP: &str = "\
iced_folio - a personal portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --content <FILE>      Portfolio TOML file replacing the built-in content
  --assets <DIR>        Directory image references are resolved against
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  ICED_FOLIO_CONFIG_DIR Config directory when --config-dir is not given
  RUST_LOG              Log filter (e.g. info, iced_folio=debug)
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        content: args.opt_value_from_str("--content")?,
        assets: args.opt_value_from_str("--assets")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
