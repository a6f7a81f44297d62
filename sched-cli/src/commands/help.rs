use crate::commands::{CommandInfo, CommandRegistry, Context, GlobalCommand};
use crate::info;
use crate::logger::Logger;
use itertools::Itertools;
use sched_lib::error::ScheduleError;

pub struct HelpCommand;

impl CommandInfo for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn arg_names(&self) -> &'static [&'static str] {
        &["command name"]
    }

    fn description(&self) -> &'static str {
        "Show the possible commands, or only the named one"
    }
}

impl GlobalCommand for HelpCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<(), ScheduleError> {
        let catalog = ctx.catalog;
        if let Some(name) = args.first() {
            let command = catalog
                .course
                .get(name)
                .or_else(|| catalog.global.get(name))
                .ok_or_else(|| ScheduleError::UnknownCommand(name.to_string()))?;
            print_command(ctx.out, command);
            return Ok(());
        }

        info!(ctx.out, "Global commands:");
        print_registry(ctx.out, catalog.global);
        info!(ctx.out, "");
        info!(ctx.out, "Per-course commands:");
        info!(ctx.out, "(A course must be selected for these to work!)");
        print_registry(ctx.out, catalog.course);
        Ok(())
    }
}

fn print_registry(out: &dyn Logger, registry: &CommandRegistry) {
    for command in registry.commands().sorted_by_key(|c| c.name()) {
        print_command(out, command);
    }
}

fn print_command(out: &dyn Logger, command: &dyn CommandInfo) {
    info!(out, "  {}", command.name());
    info!(out, "    Usage: {}", command.usage());
    info!(out, "    Description: {}", command.description());
}
