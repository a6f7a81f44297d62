pub mod course;
pub mod item;

pub use course::Course;
pub use item::ScheduledItem;
