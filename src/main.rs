mod counter;
mod dispatch;

use clap::Parser;
use std::path::PathBuf;

use dispatch::{Selector, Source};

/// Contains information parsed from the command-line invocation of rwc.
/// The selector is matched as a literal, so unknown flags fall through to
/// the not-implemented notice instead of a parse error; clap's auto help
/// flag is disabled for the same reason.
#[derive(Parser, Debug)]
#[clap(
    about = "Counts bytes, lines and words in a file or on standard input",
    disable_help_flag = true
)]
struct CmdOptions {
    #[clap(
        allow_hyphen_values = true,
        help = "Metric selector: -c (bytes), -l (lines), -w (words), -m (all three)"
    )]
    selector: String,
    #[clap(help = "File to count; standard input is read when omitted")]
    file: Option<PathBuf>,
}

fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    let selector = match Selector::from_flag(&options.selector) {
        Some(selector) => selector,
        None => {
            print!("Not yet implemented");
            return;
        }
    };

    let source = Source::from_path(options.file);
    match dispatch::run(selector, &source) {
        Ok(report) => println!("{}", report),
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }
}
