// SPDX-License-Identifier: MPL-2.0
use iced_notify::app::{self, Flags};
use iced_notify::logging;

const HELP: &str = "\
iced_notify - sliding toast notification demo

USAGE:
  iced_notify [OPTIONS] [MESSAGE]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --width <PX>          Toast width in pixels
  --hold-ms <MS>        Time the toast rests on screen
  --category <KIND>     Startup toast kind: success, error or warning
  --log <FILTER>        Log filter (e.g. debug, iced_notify=trace)
  -h, --help            Print this help

ARGS:
  [MESSAGE]             Shown as a toast at startup
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<(Flags, Option<String>), pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let width = args.opt_value_from_str("--width")?;
    let hold_ms = args.opt_value_from_str("--hold-ms")?;
    let startup_category = args.opt_value_from_str("--category")?;
    let log_filter = args.opt_value_from_str("--log")?;

    let startup_message = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let flags = Flags {
        lang,
        config_dir,
        width,
        hold_ms,
        startup_message,
        startup_category,
    };
    Ok((flags, log_filter))
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, log_filter) = match parse_flags(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(log_filter.as_deref());
    app::run(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced_notify::toast::Category;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_category_and_message() {
        let (flags, log) = parse_flags(args(&["--category", "Error", "--log", "debug", "Upload failed"]))
            .expect("valid arguments");
        assert_eq!(flags.startup_category, Some(Category::Error));
        assert_eq!(flags.startup_message.as_deref(), Some("Upload failed"));
        assert_eq!(log.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(parse_flags(args(&["--category", "info"])).is_err());
    }
}
