use crate::commands::report;
use crate::logger::Logger;
use crate::scheduler::Scheduler;
use crate::{info, warn};
use anyhow::{Context, Result};
use sched_lib::config::CliConfig;
use sched_lib::error::ScheduleError;
use std::io::{BufRead, Write};

const EXIT_COMMAND: &str = "exit";

/// Read lines from `input` and run them until `exit` or end of input.
///
/// The prompt goes to `prompt` without a trailing newline and names the
/// selected course, if any; everything else goes through `out`.
pub fn run<R: BufRead, W: Write>(
    scheduler: &mut Scheduler,
    config: &CliConfig,
    mut input: R,
    mut prompt: W,
    out: &dyn Logger,
) -> Result<()> {
    info!(out, "{}", config.greeting);
    loop {
        match scheduler.store().selected_course() {
            Some(course) => write!(prompt, "[{}] {}", course.name(), config.prompt),
            None => write!(prompt, "{}", config.prompt),
        }
        .context("failed to write prompt")?;
        prompt.flush().context("failed to flush prompt")?;

        let mut buf = Vec::new();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            log::debug!("end of input");
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line == EXIT_COMMAND {
            break;
        }
        if line.is_empty() {
            continue;
        }

        if !scheduler.dispatch(line, out) {
            let name = line.split_whitespace().next().unwrap_or(line);
            report(out, &ScheduleError::UnknownCommand(name.to_string()));
            warn!(out, "Type `help` to see available commands.");
        }
    }
    Ok(())
}
