use anyhow::Result;

use spp_ranking::cli::Command;
use spp_ranking::{handle_overview, handle_recalculate, handle_serve, handle_setup, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Setup { demo } => handle_setup(*demo),
        Command::Recalculate { season, top } => handle_recalculate(*season, *top),
        Command::Overview { season } => handle_overview(*season),
    }
}
