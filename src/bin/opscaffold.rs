use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = opscaffold::logging::init_logging() {
        eprintln!("Warning: {e:#}");
    }

    match opscaffold::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
