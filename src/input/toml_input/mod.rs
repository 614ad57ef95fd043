mod leave;
mod task;

pub use leave::*;
pub use task::*;
