use serde::Deserialize;

use crate::input::toml_input::Leave;
use crate::schedule::WorkWindow;
use crate::time::DateTime;

/// The `[task]` section: when the work starts and how long it takes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskSection {
    start: DateTime,
    hours: i64,
}

impl TaskSection {
    #[must_use]
    pub const fn start(&self) -> DateTime {
        self.start
    }

    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }
}

/// A whole task file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskFile {
    task: TaskSection,
    working_hours: WorkWindow,
    #[serde(default)]
    leave: Leave,
}

impl TaskFile {
    #[must_use]
    pub const fn task(&self) -> &TaskSection {
        &self.task
    }

    #[must_use]
    pub const fn working_hours(&self) -> &WorkWindow {
        &self.working_hours
    }

    #[must_use]
    pub const fn leave(&self) -> &Leave {
        &self.leave
    }
}
