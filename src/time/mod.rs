mod month;
pub use month::*;
mod date;
pub use date::*;
mod year;
pub use year::*;
mod hour;
pub use hour::*;
mod time_of_day;
pub use time_of_day::*;
mod date_time;
pub use date_time::*;
