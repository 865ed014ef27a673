//! Driver for the fracsort demo: configuration, random sort workloads and a
//! walkthrough of the rational operations. The arithmetic itself lives in the
//! `fracsort` crate.

pub mod config;
pub mod demo;
pub mod workload;

pub use config::{Command, ConfigError, DemoConfig, parse_args};
pub use demo::walkthrough;
pub use workload::{Timing, Workload, run_all};
