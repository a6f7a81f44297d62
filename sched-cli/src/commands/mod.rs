pub mod course;
pub mod help;
pub mod item;
pub mod show;

use crate::error;
use crate::logger::Logger;
use sched_lib::error::ScheduleError;
use sched_lib::models::Course;
use sched_lib::storage::ScheduleStore;
use std::collections::HashMap;

/// Metadata shared by every command, global or course-scoped.
pub trait CommandInfo {
    fn name(&self) -> &'static str;

    /// Number of leading arguments that must be present.
    fn required_args(&self) -> usize {
        0
    }

    /// One name per argument slot, required ones first.
    fn arg_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn description(&self) -> &'static str;

    /// `name <required> [optional]`
    fn usage(&self) -> String {
        let mut usage = self.name().to_string();
        for (i, arg) in self.arg_names().iter().enumerate() {
            if i < self.required_args() {
                usage.push_str(&format!(" <{}>", arg));
            } else {
                usage.push_str(&format!(" [{}]", arg));
            }
        }
        usage
    }

    fn accepts(&self, arg_count: usize) -> bool {
        arg_count >= self.required_args() && arg_count <= self.arg_names().len()
    }
}

/// A command that is always available.
pub trait GlobalCommand: CommandInfo {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<(), ScheduleError>;
}

/// A command that works on the currently selected course.
pub trait CourseCommand: CommandInfo {
    fn execute_course(
        &self,
        course: &mut Course,
        args: &[&str],
        out: &dyn Logger,
    ) -> Result<(), ScheduleError>;
}

pub enum RegisteredCommand {
    Global(Box<dyn GlobalCommand>),
    Course(Box<dyn CourseCommand>),
}

impl CommandInfo for RegisteredCommand {
    fn name(&self) -> &'static str {
        match self {
            RegisteredCommand::Global(command) => command.name(),
            RegisteredCommand::Course(command) => command.name(),
        }
    }

    fn required_args(&self) -> usize {
        match self {
            RegisteredCommand::Global(command) => command.required_args(),
            RegisteredCommand::Course(command) => command.required_args(),
        }
    }

    fn arg_names(&self) -> &'static [&'static str] {
        match self {
            RegisteredCommand::Global(command) => command.arg_names(),
            RegisteredCommand::Course(command) => command.arg_names(),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            RegisteredCommand::Global(command) => command.description(),
            RegisteredCommand::Course(command) => command.description(),
        }
    }

    fn usage(&self) -> String {
        match self {
            RegisteredCommand::Global(command) => command.usage(),
            RegisteredCommand::Course(command) => command.usage(),
        }
    }
}

impl RegisteredCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<(), ScheduleError> {
        match self {
            RegisteredCommand::Global(command) => command.execute(ctx, args),
            RegisteredCommand::Course(command) => {
                let out = ctx.out;
                match ctx.store.selected_course_mut() {
                    Some(course) => command.execute_course(course, args, out),
                    None => Err(ScheduleError::InternalRoutingDefect(
                        command.name().to_string(),
                    )),
                }
            }
        }
    }
}

impl From<Box<dyn GlobalCommand>> for RegisteredCommand {
    fn from(command: Box<dyn GlobalCommand>) -> Self {
        RegisteredCommand::Global(command)
    }
}

impl From<Box<dyn CourseCommand>> for RegisteredCommand {
    fn from(command: Box<dyn CourseCommand>) -> Self {
        RegisteredCommand::Course(command)
    }
}

/// Read-only view of both registries, for `help`.
#[derive(Copy, Clone)]
pub struct Catalog<'a> {
    pub global: &'a CommandRegistry,
    pub course: &'a CommandRegistry,
}

/// Everything a command can touch while it runs.
pub struct Context<'a> {
    pub store: &'a mut ScheduleStore,
    pub out: &'a dyn Logger,
    pub catalog: Catalog<'a>,
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, RegisteredCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register_global<C: GlobalCommand + 'static>(&mut self, command: C) {
        self.register(Box::new(command) as Box<dyn GlobalCommand>);
    }

    pub fn register_course<C: CourseCommand + 'static>(&mut self, command: C) {
        self.register(Box::new(command) as Box<dyn CourseCommand>);
    }

    /// Insert a command, replacing any earlier one with the same name.
    pub fn register(&mut self, command: impl Into<RegisteredCommand>) {
        let command = command.into();
        self.commands.insert(command.name(), command);
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredCommand> {
        self.commands.get(name)
    }

    /// Registered commands in no particular order.
    pub fn commands(&self) -> impl Iterator<Item = &RegisteredCommand> {
        self.commands.values()
    }

    /// Try to run `input` as one of this registry's commands.
    ///
    /// Returns false only when the input is empty or names a command this
    /// registry does not know. A known command with the wrong number of
    /// arguments still counts as handled: its usage is printed instead.
    pub fn dispatch(&self, input: &str, ctx: &mut Context<'_>) -> bool {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let Some((name, args)) = tokens.split_first() else {
            return false;
        };
        let Some(command) = self.commands.get(*name) else {
            return false;
        };

        let result = if command.accepts(args.len()) {
            log::debug!("executing '{}' with {:?}", name, args);
            command.execute(ctx, args)
        } else {
            Err(ScheduleError::ArgCountMismatch {
                usage: command.usage(),
            })
        };

        if let Err(e) = result {
            report(ctx.out, &e);
        }
        true
    }
}

/// Print a command failure on the error channel.
pub fn report(out: &dyn Logger, err: &ScheduleError) {
    if err.is_internal() {
        log::error!("{}", err);
    }
    error!(out, "{}", err);
}
