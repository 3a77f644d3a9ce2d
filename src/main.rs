//! svgcss - Embed SVG icons into a single CSS stylesheet.

mod cli;

use clap::{ColorChoice, Parser};
use cli::{Cli, build::build};
use svgcss::{log, logger};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match build(&cli).await {
        Ok(path) => log!("done"; "wrote {}", path.display()),
        Err(err) => {
            log!("error"; "{:#}", err);
            std::process::exit(1);
        }
    }
}
