pub mod common;
pub mod error;
pub mod task;

pub use common::*;
pub use error::*;
pub use task::*;
