use crate::commands::{CommandInfo, Context, GlobalCommand};
use crate::{info, success};
use itertools::Itertools;
use sched_lib::error::ScheduleError;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

pub(crate) const NO_COURSES: &str = "  No courses! Use `add-course <name>` to create one.";

pub struct AddCourseCommand;

impl CommandInfo for AddCourseCommand {
    fn name(&self) -> &'static str {
        "add-course"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn arg_names(&self) -> &'static [&'static str] {
        &["name"]
    }

    fn description(&self) -> &'static str {
        "Add a new course by the given name"
    }
}

impl GlobalCommand for AddCourseCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<(), ScheduleError> {
        let name = args[0];
        if !ctx.store.add_course(name) {
            return Err(ScheduleError::DuplicateCourseName(name.to_string()));
        }
        ctx.store.select_course(Some(name));
        success!(ctx.out, "Created & selected course: \"{}\".", name);
        Ok(())
    }
}

pub struct RemoveCourseCommand;

impl CommandInfo for RemoveCourseCommand {
    fn name(&self) -> &'static str {
        "rem-course"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn arg_names(&self) -> &'static [&'static str] {
        &["name"]
    }

    fn description(&self) -> &'static str {
        "Remove the course with the provided name"
    }
}

impl GlobalCommand for RemoveCourseCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<(), ScheduleError> {
        let name = args[0];
        if !ctx.store.remove_course(name) {
            return Err(ScheduleError::CourseNotFound(name.to_string()));
        }
        success!(ctx.out, "Removed course: \"{}\".", name);
        Ok(())
    }
}

pub struct ListCourseCommand;

#[derive(Debug, Tabled)]
struct CourseInfo {
    course: String,
    due: usize,
    #[tabled(rename = "past-due")]
    past_due: usize,
}

impl CommandInfo for ListCourseCommand {
    fn name(&self) -> &'static str {
        "list-course"
    }

    fn description(&self) -> &'static str {
        "List all courses"
    }
}

impl GlobalCommand for ListCourseCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[&str]) -> Result<(), ScheduleError> {
        info!(ctx.out, "Courses:");
        if ctx.store.course_count() == 0 {
            info!(ctx.out, "{}", NO_COURSES);
            return Ok(());
        }

        let rows = ctx
            .store
            .courses()
            .sorted_by(|a, b| a.name().cmp(b.name()))
            .map(|course| CourseInfo {
                course: course.name().to_string(),
                due: course.future_due().len(),
                past_due: course.past_due().len(),
            })
            .collect::<Vec<_>>();

        let mut table = Table::new(rows);
        table.with(Style::modern().remove_horizontal());
        table.with(Modify::new(Columns::new(1..)).with(Alignment::center()));
        info!(ctx.out, "{table}");
        Ok(())
    }
}

pub struct SelectCourseCommand;

impl CommandInfo for SelectCourseCommand {
    fn name(&self) -> &'static str {
        "select-course"
    }

    fn arg_names(&self) -> &'static [&'static str] {
        &["name"]
    }

    fn description(&self) -> &'static str {
        "Select the course by the provided name, or deselect the current course if no name is provided"
    }
}

impl GlobalCommand for SelectCourseCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<(), ScheduleError> {
        match args.first().copied() {
            Some(name) => {
                if !ctx.store.select_course(Some(name)) {
                    return Err(ScheduleError::CourseNotFound(name.to_string()));
                }
                success!(ctx.out, "Selected course: \"{}\".", name);
            }
            None if ctx.store.has_selection() => {
                ctx.store.select_course(None);
                success!(ctx.out, "Deselected course");
            }
            None => info!(ctx.out, "No course selected"),
        }
        Ok(())
    }
}
