use crate::commands::course::{
    AddCourseCommand, ListCourseCommand, RemoveCourseCommand, SelectCourseCommand,
};
use crate::commands::help::HelpCommand;
use crate::commands::item::{AddItemCommand, ListItemCommand, RemoveItemCommand};
use crate::commands::show::{ShowCommand, ShowItemCommand};
use crate::commands::{Catalog, CommandRegistry, Context};
use crate::logger::Logger;
use sched_lib::storage::ScheduleStore;

/// Owns the schedule and routes input lines to the right registry.
pub struct Scheduler {
    store: ScheduleStore,
    global: CommandRegistry,
    course: CommandRegistry,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        let mut global = CommandRegistry::new();
        global.register_global(HelpCommand);
        global.register_global(AddCourseCommand);
        global.register_global(RemoveCourseCommand);
        global.register_global(ListCourseCommand);
        global.register_global(SelectCourseCommand);
        global.register_global(ShowCommand);

        let mut course = CommandRegistry::new();
        course.register_course(AddItemCommand);
        course.register_course(RemoveItemCommand);
        course.register_course(ShowItemCommand);
        course.register_course(ListItemCommand);

        Self {
            store: ScheduleStore::new(),
            global,
            course,
        }
    }

    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    /// Run one input line.
    ///
    /// With a course selected, course commands are tried first and shadow
    /// global ones of the same name. Returns false when neither registry
    /// knows the command.
    pub fn dispatch(&mut self, input: &str, out: &dyn Logger) -> bool {
        let Self {
            store,
            global,
            course,
        } = self;
        let global: &CommandRegistry = global;
        let course: &CommandRegistry = course;
        let course_first = store.has_selection();
        let mut ctx = Context {
            store,
            out,
            catalog: Catalog { global, course },
        };

        if course_first && course.dispatch(input, &mut ctx) {
            return true;
        }
        global.dispatch(input, &mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandInfo, CourseCommand};
    use crate::logger::CollectingLogger;
    use crate::success;
    use sched_lib::error::ScheduleError;
    use sched_lib::models::Course;

    /// Course command named like a global one, to observe shadowing.
    struct CourseShow;

    impl CommandInfo for CourseShow {
        fn name(&self) -> &'static str {
            "show"
        }

        fn description(&self) -> &'static str {
            "Course-level show"
        }
    }

    impl CourseCommand for CourseShow {
        fn execute_course(
            &self,
            course: &mut Course,
            _args: &[&str],
            out: &dyn Logger,
        ) -> Result<(), ScheduleError> {
            success!(out, "course show for {}", course.name());
            Ok(())
        }
    }

    fn shadowing_scheduler() -> Scheduler {
        let mut scheduler = Scheduler::new();
        scheduler.course.register_course(CourseShow);
        scheduler
    }

    #[test]
    fn test_unknown_command_is_unhandled() {
        let mut scheduler = Scheduler::new();
        let out = CollectingLogger::new();
        assert!(!scheduler.dispatch("frobnicate", &out));
        assert!(!scheduler.dispatch("", &out));
        assert!(out.stdout().is_empty());
        assert!(out.stderr().is_empty());
    }

    #[test]
    fn test_course_commands_need_a_selection() {
        let mut scheduler = Scheduler::new();
        let out = CollectingLogger::new();
        assert!(!scheduler.dispatch("add-item HW1 2099-01-01", &out));
        assert!(!scheduler.dispatch("list-item", &out));
        assert!(out.stderr().is_empty());
    }

    #[test]
    fn test_global_commands_still_reachable_with_selection() {
        let mut scheduler = Scheduler::new();
        let out = CollectingLogger::new();
        scheduler.dispatch("add-course CS101", &out);
        out.clear();
        assert!(scheduler.dispatch("list-course", &out));
        assert!(scheduler.dispatch("add-course MATH200", &out));
        assert_eq!(scheduler.store().course_count(), 2);
    }

    #[test]
    fn test_course_command_shadows_global_when_selected() {
        let mut scheduler = shadowing_scheduler();
        let out = CollectingLogger::new();
        scheduler.dispatch("add-course CS101", &out);
        out.clear();

        scheduler.dispatch("show", &out);
        assert_eq!(out.stdout(), vec!["course show for CS101"]);
    }

    #[test]
    fn test_global_runs_when_nothing_selected() {
        let mut scheduler = shadowing_scheduler();
        let out = CollectingLogger::new();
        scheduler.dispatch("add-course CS101", &out);
        scheduler.dispatch("select-course", &out);
        out.clear();

        scheduler.dispatch("show", &out);
        assert_eq!(out.stdout()[0], "Courses:");
    }

    #[test]
    fn test_bad_arity_in_course_registry_is_not_retried_globally() {
        let mut scheduler = shadowing_scheduler();
        let out = CollectingLogger::new();
        scheduler.dispatch("add-course CS101", &out);
        out.clear();

        // the course-level show takes no arguments; the global one is not tried
        assert!(scheduler.dispatch("show extra", &out));
        assert_eq!(out.stderr(), vec!["Usage: show"]);
        assert!(out.stdout().is_empty());
    }

    #[test]
    fn test_walkthrough() {
        let mut scheduler = Scheduler::new();
        let out = CollectingLogger::new();

        scheduler.dispatch("add-course CS101", &out);
        scheduler.dispatch("add-course CS101", &out);
        assert_eq!(scheduler.store().course_count(), 1);

        scheduler.dispatch("add-item HW1 2099-01-01", &out);
        scheduler.dispatch("rem-item 5", &out);
        assert_eq!(scheduler.store().selected_course().unwrap().len(), 1);

        scheduler.dispatch("rem-item 0", &out);
        scheduler.dispatch("rem-item 0", &out);
        assert!(scheduler.store().selected_course().unwrap().is_empty());

        scheduler.dispatch("select-course Nope", &out);
        assert_eq!(
            scheduler.store().selected_course().map(|c| c.name()),
            Some("CS101")
        );

        assert_eq!(
            out.stdout(),
            vec![
                "Created & selected course: \"CS101\".",
                "Item added",
                "Removed item",
            ]
        );
        let stderr = out.stderr();
        assert_eq!(stderr.len(), 4);
        assert_eq!(stderr[0], "Course by name of \"CS101\" already exists.");
        assert!(stderr[1].contains("out of range"));
        assert!(stderr[2].contains("out of range"));
        assert_eq!(stderr[3], "No course by name \"Nope\".");
    }
}
