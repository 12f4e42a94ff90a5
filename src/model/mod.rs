pub mod preference;
pub mod task;

pub use preference::ThemePreference;
pub use task::{Task, TaskCounts, TaskFilter, TaskId};
