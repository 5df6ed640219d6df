mod log;
mod task;


pub use log::*;
pub use task::*;
