mod commands;
mod terminal;

use std::io;

use commands::session::Session;
use commands::{CommandLine, Commands};
use hospital_common::time::Clock;
use hospital_core::Hospital;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;
    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let hospital = Hospital::new(Clock::new(cfg.start_date));
    let mut session = Session::new(hospital, &cfg);

    match commands.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            print::header(&format!("admissions open {}", cfg.start_date), cfg.quiet);
            session.interactive(io::stdin().lock())?;
        }
        Commands::Run { script } => {
            print::header("running script", cfg.quiet);
            session.run_script(&script)?;
        }
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
