mod infra;

pub use infra::*;
