pub mod grammar;
pub mod session;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use hospital_common::config::Config;
use hospital_common::time::Date;

#[derive(Parser)]
#[command(name = "hospital")]
#[command(about = "Record keeping for a simulated hospital.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Do not print the start-up banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less decoration (repeat for even less)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not echo commands read from a script
    #[arg(long, global = true)]
    pub no_echo: bool,

    /// Date the simulated clock starts on
    #[arg(long, global = true, value_name = "D.M.YYYY")]
    pub date: Option<Date>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read commands from the terminal (default)
    #[command(alias = "r")]
    Repl,
    /// Execute every command in a script file, then exit
    #[command(alias = "x")]
    Run { script: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            echo: !self.no_echo,
            start_date: self.date.unwrap_or_default(),
        }
    }
}
