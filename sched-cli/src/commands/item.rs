use crate::commands::{CommandInfo, CourseCommand};
use crate::logger::Logger;
use crate::{info, success};
use sched_lib::common::common::Common;
use sched_lib::error::ScheduleError;
use sched_lib::models::Course;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

pub struct AddItemCommand;

impl CommandInfo for AddItemCommand {
    fn name(&self) -> &'static str {
        "add-item"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn arg_names(&self) -> &'static [&'static str] {
        &["name", "due date in format yyyy-MM-dd"]
    }

    fn description(&self) -> &'static str {
        "Add an item to the currently selected course"
    }
}

impl CourseCommand for AddItemCommand {
    fn execute_course(
        &self,
        course: &mut Course,
        args: &[&str],
        out: &dyn Logger,
    ) -> Result<(), ScheduleError> {
        let due = Common::parse_date(args[1])?;
        course.add_item(args[0], due);
        success!(out, "Item added");
        Ok(())
    }
}

pub struct RemoveItemCommand;

impl CommandInfo for RemoveItemCommand {
    fn name(&self) -> &'static str {
        "rem-item"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn arg_names(&self) -> &'static [&'static str] {
        &["id"]
    }

    fn description(&self) -> &'static str {
        "Remove the item with the given ID number from the currently selected course"
    }
}

impl CourseCommand for RemoveItemCommand {
    fn execute_course(
        &self,
        course: &mut Course,
        args: &[&str],
        out: &dyn Logger,
    ) -> Result<(), ScheduleError> {
        let len = course.len();
        let index = args[0]
            .parse::<i64>()
            .map_err(|_| ScheduleError::InvalidIndex {
                input: args[0].to_string(),
                len,
            })?;
        let removed = usize::try_from(index).is_ok_and(|i| course.remove_item(i));
        if !removed {
            return Err(ScheduleError::IndexOutOfRange { index, len });
        }
        success!(out, "Removed item");
        Ok(())
    }
}

pub struct ListItemCommand;

#[derive(Debug, Tabled)]
struct ItemInfo {
    id: usize,
    due: String,
    name: String,
}

impl CommandInfo for ListItemCommand {
    fn name(&self) -> &'static str {
        "list-item"
    }

    fn description(&self) -> &'static str {
        "List all items & their IDs for the current course"
    }
}

impl CourseCommand for ListItemCommand {
    fn execute_course(
        &self,
        course: &mut Course,
        _args: &[&str],
        out: &dyn Logger,
    ) -> Result<(), ScheduleError> {
        info!(out, "Course items:");
        if course.is_empty() {
            info!(out, "  None! Use `add-item <name> <yyyy-MM-dd>` to add one.");
            return Ok(());
        }

        let rows = course
            .items()
            .iter()
            .enumerate()
            .map(|(id, item)| ItemInfo {
                id,
                due: Common::format_date(&item.due()),
                name: item.name().to_string(),
            })
            .collect::<Vec<_>>();
        let mut table = Table::new(rows);
        table.with(Style::modern().remove_horizontal());
        table.with(Modify::new(Columns::first()).with(Alignment::right()));
        info!(out, "{table}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::logger::CollectingLogger;
    use crate::scheduler::Scheduler;

    fn with_course() -> (Scheduler, CollectingLogger) {
        let mut scheduler = Scheduler::new();
        let out = CollectingLogger::new();
        scheduler.dispatch("add-course CS101", &out);
        out.clear();
        (scheduler, out)
    }

    fn item_names(scheduler: &Scheduler) -> Vec<String> {
        scheduler
            .store()
            .selected_course()
            .unwrap()
            .items()
            .iter()
            .map(|i| i.name().to_string())
            .collect()
    }

    #[test]
    fn test_add_item_then_list() {
        let (mut scheduler, out) = with_course();
        assert!(scheduler.dispatch("add-item HW1 2099-01-01", &out));
        assert_eq!(out.stdout(), vec!["Item added"]);
        out.clear();

        assert!(scheduler.dispatch("list-item", &out));
        let stdout = out.stdout();
        assert_eq!(stdout[0], "Course items:");
        let row = stdout[1].lines().find(|l| l.contains("HW1")).unwrap();
        let cells: Vec<&str> = row
            .split('│')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        assert_eq!(cells, vec!["0", "2099-01-01", "HW1"]);
    }

    #[test]
    fn test_add_item_allows_duplicate_names() {
        let (mut scheduler, out) = with_course();
        scheduler.dispatch("add-item HW1 2099-01-01", &out);
        scheduler.dispatch("add-item HW1 2099-02-01", &out);
        assert_eq!(item_names(&scheduler), vec!["HW1", "HW1"]);
    }

    #[test]
    fn test_add_item_rejects_bad_date() {
        let (mut scheduler, out) = with_course();
        assert!(scheduler.dispatch("add-item HW1 01/02/2099", &out));
        let stderr = out.stderr();
        assert_eq!(stderr.len(), 1);
        assert!(stderr[0].starts_with("Invalid date format ("));
        assert!(item_names(&scheduler).is_empty());
    }

    #[test]
    fn test_add_item_arity() {
        let (mut scheduler, out) = with_course();
        scheduler.dispatch("add-item HW1", &out);
        assert_eq!(
            out.stderr(),
            vec!["Usage: add-item <name> <due date in format yyyy-MM-dd>"]
        );
        assert!(item_names(&scheduler).is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let (mut scheduler, out) = with_course();
        scheduler.dispatch("add-item HW1 2099-01-01", &out);
        out.clear();

        assert!(scheduler.dispatch("rem-item 5", &out));
        assert!(scheduler.dispatch("rem-item -1", &out));
        let stderr = out.stderr();
        assert_eq!(stderr.len(), 2);
        assert!(stderr.iter().all(|e| e.contains("out of range")));
        assert_eq!(item_names(&scheduler), vec!["HW1"]);
    }

    #[test]
    fn test_remove_until_empty() {
        let (mut scheduler, out) = with_course();
        scheduler.dispatch("add-item HW1 2099-01-01", &out);
        out.clear();

        scheduler.dispatch("rem-item 0", &out);
        assert_eq!(out.stdout(), vec!["Removed item"]);
        assert!(item_names(&scheduler).is_empty());

        scheduler.dispatch("rem-item 0", &out);
        assert_eq!(out.stderr().len(), 1);
        assert!(out.stderr()[0].contains("out of range"));
    }

    #[test]
    fn test_remove_shifts_indices() {
        let (mut scheduler, out) = with_course();
        for name in ["a", "b", "c"] {
            scheduler.dispatch(&format!("add-item {} 2099-01-01", name), &out);
        }
        scheduler.dispatch("rem-item 1", &out);
        assert_eq!(item_names(&scheduler), vec!["a", "c"]);
        scheduler.dispatch("rem-item 1", &out);
        assert_eq!(item_names(&scheduler), vec!["a"]);
    }

    #[test]
    fn test_remove_non_numeric_id() {
        let (mut scheduler, out) = with_course();
        scheduler.dispatch("add-item HW1 2099-01-01", &out);
        scheduler.dispatch("add-item HW2 2099-01-01", &out);
        out.clear();

        scheduler.dispatch("rem-item first", &out);
        assert_eq!(
            out.stderr(),
            vec!["Invalid ID \"first\" (must be a number 0-1, use list-item to see item IDs)"]
        );
        assert_eq!(item_names(&scheduler).len(), 2);
    }

    #[test]
    fn test_list_item_when_empty() {
        let (mut scheduler, out) = with_course();
        scheduler.dispatch("list-item", &out);
        assert_eq!(out.stdout().len(), 2);
        assert!(out.stdout()[1].contains("None!"));
    }
}
