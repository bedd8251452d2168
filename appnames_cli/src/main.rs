mod ui;

use appnames_core::utils::logging::init_logging;
use clap::Parser;
use log::LevelFilter;

use crate::ui::cli;

fn main() {
    let args = cli::Args::parse();
    init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    let stdout = std::io::stdout();
    if let Err(e) = cli::run_cli(args, &mut stdout.lock()) {
        eprintln!("appnames: {e}");
        std::process::exit(1);
    }
}
