use extcount_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Log file under XDG state dir; stderr only if that cannot be set up.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
