pub mod debug_demo;
pub mod hello_demo;
pub mod routines;
pub mod runner;

pub use crate::domain::model::DemoReport;
pub use crate::domain::ports::{Console, Demo};
