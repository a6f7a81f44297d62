use crate::commands::course::NO_COURSES;
use crate::commands::{CommandInfo, Context, CourseCommand, GlobalCommand};
use crate::info;
use crate::logger::Logger;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use sched_lib::error::ScheduleError;
use sched_lib::models::{Course, ScheduledItem};

/// Items due at or after `now`, soonest first.
pub fn upcoming(course: &Course, now: DateTime<Utc>) -> Vec<&ScheduledItem> {
    course
        .future_due_at(now)
        .into_iter()
        .sorted_by(|a, b| a.cmp_due(b))
        .collect()
}

/// Items due before `now`, most recently passed first.
pub fn overdue(course: &Course, now: DateTime<Utc>) -> Vec<&ScheduledItem> {
    course
        .past_due_at(now)
        .into_iter()
        .sorted_by(|a, b| b.cmp_due(a))
        .collect()
}

fn print_items(out: &dyn Logger, indent: &str, items: &[&ScheduledItem]) {
    if items.is_empty() {
        info!(out, "{}  None!", indent);
    }
    for item in items {
        info!(out, "{}- {}", indent, item);
    }
}

/// Print the upcoming and past-due sections of one course.
pub fn print_due_lists(out: &dyn Logger, course: &Course, indent: &str) {
    let now = Utc::now();
    info!(out, "{}Upcoming:", indent);
    print_items(out, indent, &upcoming(course, now));
    info!(out, "{}Past-due:", indent);
    print_items(out, indent, &overdue(course, now));
}

pub struct ShowCommand;

impl CommandInfo for ShowCommand {
    fn name(&self) -> &'static str {
        "show"
    }

    fn description(&self) -> &'static str {
        "Show all courses and their upcoming/past-due assignments"
    }
}

impl GlobalCommand for ShowCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[&str]) -> Result<(), ScheduleError> {
        info!(ctx.out, "Courses:");
        if ctx.store.course_count() == 0 {
            info!(ctx.out, "{}", NO_COURSES);
            return Ok(());
        }
        for course in ctx.store.courses().sorted_by(|a, b| a.name().cmp(b.name())) {
            info!(ctx.out, "  {}:", course.name());
            print_due_lists(ctx.out, course, "    ");
        }
        Ok(())
    }
}

pub struct ShowItemCommand;

impl CommandInfo for ShowItemCommand {
    fn name(&self) -> &'static str {
        "show-item"
    }

    fn description(&self) -> &'static str {
        "Show all items from the current course"
    }
}

impl CourseCommand for ShowItemCommand {
    fn execute_course(
        &self,
        course: &mut Course,
        _args: &[&str],
        out: &dyn Logger,
    ) -> Result<(), ScheduleError> {
        info!(out, "Course items:");
        print_due_lists(out, course, "  ");
        Ok(())
    }
}
