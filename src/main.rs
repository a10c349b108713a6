// SPDX-License-Identifier: MPL-2.0
use pdf_compare::app::{self, paths, Flags};
use pdf_compare::logging;

const HELP: &str = "\
Usage: pdf_compare [OPTIONS] [FILE]

Arguments:
  [FILE]                 PDF to open on startup

Options:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --pdfium <PATH>        PDFium library file or directory
  -h, --help             Print help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init();

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        config_dir: opt_string(&mut args, "--config-dir"),
        pdfium_path: opt_string(&mut args, "--pdfium"),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%key, error = %err, "ignoring invalid argument");
            None
        }
    }
}
