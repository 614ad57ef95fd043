mod leave_set;
mod simulator;
mod task;
mod work_window;

pub use leave_set::*;
pub use simulator::*;
pub use task::*;
pub use work_window::*;
