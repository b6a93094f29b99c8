pub mod demo;
pub mod input;
pub mod interactive;
pub mod report;

use crate::config::{AppConfig, RunMode};
use crate::errors::EngineResult;
use crate::models::OptionPricer;
use std::io::{BufRead, Write};

/// Top-level dispatch. Menu mode keeps asking until it gets 1, 2 or 3.
pub fn run<R: BufRead, W: Write>(
    mode: RunMode,
    config: &AppConfig,
    pricer: &dyn OptionPricer,
    reader: &mut R,
    out: &mut W,
) -> EngineResult<()> {
    write!(out, "{}", report::header())?;

    match mode {
        RunMode::Interactive => interactive::run(reader, out, config, pricer),
        RunMode::Demo => demo::run(out, config, pricer),
        RunMode::Menu => {
            writeln!(out)?;
            writeln!(out, "SELECT MODE:")?;
            writeln!(out, "1. Interactive Mode (enter your own parameters)")?;
            writeln!(out, "2. Demo Mode (see preset examples)")?;
            writeln!(out, "3. Exit")?;

            loop {
                let Some(choice) = input::prompt(reader, out, "\nEnter your choice (1-3): ")? else {
                    return Ok(());
                };
                match choice.as_str() {
                    "1" => return interactive::run(reader, out, config, pricer),
                    "2" => return demo::run(out, config, pricer),
                    "3" => {
                        writeln!(out, "Goodbye!")?;
                        return Ok(());
                    }
                    _ => writeln!(out, "Invalid choice. Please enter 1, 2, or 3.")?,
                }
            }
        }
    }
}
