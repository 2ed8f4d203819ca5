//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = fleetroute_cli::run() {
        match err {
            // Let clap render help, version, and usage errors itself so the
            // exit codes and output streams match user expectations.
            fleetroute_cli::CliError::ArgumentParsing(parse_err) => parse_err.exit(),
            other => {
                eprintln!("fleetroute: {other}");
                std::process::exit(1);
            }
        }
    }
}
