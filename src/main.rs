use urlrun::cli;
use urlrun::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging().expect("failed to initialize logging");

    // One attempt per process lifetime: any error is recorded to the trace
    // sink and the process exits non-zero. No dialog, nothing on stdout;
    // the OS shell that invoked us is not listening.
    if let Err(err) = cli::run_from_args() {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}
