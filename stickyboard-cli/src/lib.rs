#[macro_use]
extern crate tracing;

pub mod configuration;
pub mod shell;
pub mod startup;
pub mod telemetry;
