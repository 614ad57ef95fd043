use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::{debug, info};

use crate::input::toml_input;
use crate::schedule::{Completion, InvalidDuration, LeaveSet, Task, WorkWindow};
use crate::time::{Date, DateTime};
use crate::utils;

pub struct Config {
    task: Task,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    start: Option<DateTime>,
    hours: Option<i64>,
    window: Option<WorkWindow>,
    leaves: LeaveSet,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn from_task_file(file: toml_input::TaskFile) -> Self {
        Self {
            start: Some(file.task().start()),
            hours: Some(file.task().hours()),
            window: Some(*file.working_hours()),
            leaves: file.leave().to_leave_set(),
        }
    }

    pub fn start(&mut self, start: DateTime) -> &mut Self {
        self.start = Some(start);
        self
    }

    pub fn hours(&mut self, hours: i64) -> &mut Self {
        self.hours = Some(hours);
        self
    }

    pub fn window(&mut self, window: WorkWindow) -> &mut Self {
        self.window = Some(window);
        self
    }

    pub fn leave(&mut self, date: Date) -> &mut Self {
        self.leaves.insert(date);
        self
    }

    pub fn build(self) -> anyhow::Result<Config> {
        let start = self
            .start
            .ok_or_else(|| anyhow::anyhow!("missing start of the task"))?;
        let hours = self
            .hours
            .ok_or_else(|| anyhow::anyhow!("missing number of hours the task takes"))?;
        let window = self
            .window
            .ok_or_else(|| anyhow::anyhow!("missing working hours"))?;

        let hours = u32::try_from(InvalidDuration::check(hours)?)
            .with_context(|| format!("a task of {} hours is too long", hours))?;

        debug!(
            "task starting at {} for {} hours in {} with {} days of leave",
            start,
            hours,
            window,
            self.leaves.len()
        );

        Ok(Config {
            task: Task::new(start, hours, window, self.leaves),
        })
    }
}

impl Config {
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    #[must_use]
    pub fn from_toml(file: toml_input::TaskFile) -> ConfigBuilder {
        ConfigBuilder::from_task_file(file)
    }

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let path = path.as_ref();
        info!("reading task from \"{}\"", path.display());

        let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
        let file: toml_input::TaskFile = utils::toml_from_reader(file)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        Ok(Self::from_toml(file))
    }

    #[must_use]
    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn completion(&self) -> anyhow::Result<Completion> {
        Ok(self.task.completion()?)
    }

    pub fn to_completion_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.completion()?)?)
    }
}
