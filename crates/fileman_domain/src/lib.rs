mod env;
mod file;
mod task;

pub use env::*;
pub use file::*;
pub use task::*;
