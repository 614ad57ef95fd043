mod utils;

pub mod input;
pub mod schedule;
pub mod time;

use log::info;

use crate::input::Config;
use crate::schedule::Completion;

pub fn estimate_completion(config: &Config) -> anyhow::Result<Completion> {
    let task = config.task();
    info!(
        "estimating {} hours of work starting at {}, working {}",
        task.hours(),
        task.start(),
        task.window()
    );

    if !task.leaves().is_empty() {
        info!("{} days of leave", task.leaves().len());
    }

    let completion = config.completion()?;
    info!("finished at {}", completion.finished());

    Ok(completion)
}
