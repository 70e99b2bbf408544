//! numconv command-line entry point.

use clap::Parser;
use numconv_cli::cli::{Cli, Command};
use numconv_cli::commands::{run_convert, run_inspect};
use numconv_cli::logging::init_logging;
use numconv_cli::summary::{print_convert_summary, print_inspect_summary};
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config(io::stderr().is_terminal());
    let hides_progress = cli.hides_progress();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Convert(mut args) => {
            args.no_progress |= hides_progress;
            match run_convert(&args) {
                Ok(outcome) => {
                    print_convert_summary(&outcome);
                    0
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Inspect(args) => match run_inspect(&args) {
            Ok(outcome) => {
                print_inspect_summary(&outcome);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}
