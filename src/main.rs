// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};
use iced_toaster::toast::{Mode, Position};
use std::path::PathBuf;

const HELP: &str = "\
iced_toaster playground

USAGE:
  iced_toaster [OPTIONS]

OPTIONS:
  --lang <id>         Locale to use (e.g. en-US, fr)
  --config <path>     Settings file to load and save
  --position <pos>    top-left | top-center | top-right |
                      bottom-left | bottom-center | bottom-right
  --mode <mode>       multi | single
  -h, --help          Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_path: args.opt_value_from_str::<_, PathBuf>("--config")?,
        position: args.opt_value_from_fn("--position", str::parse::<Position>)?,
        mode: args.opt_value_from_fn("--mode", str::parse::<Mode>)?,
    };

    for unknown in args.finish() {
        log::warn!("ignoring argument {}", unknown.to_string_lossy());
    }
    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
