//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = grf_cli::run() {
        eprintln!("grf: {err}");
        std::process::exit(1);
    }
}
