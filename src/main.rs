use tile_envelope::{
    parser::{Args, Command},
    steps::generate_indices,
};

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_filter()))
        .format_target(false)
        .init();

    match &args.command {
        Command::GenerateIndices(cmd) => {
            match generate_indices(
                &cmd.file_parameters(),
                &cmd.field_parameters(),
                &cmd.footprint_parameters(),
            ) {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("{e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
