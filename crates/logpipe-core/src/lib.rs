//! logpipe core: event model, filter contract, registry and runner
//!
//! ```text
//! YAML → PipelineConfig → FilterRegistry::build → FilterChain
//!                                                    ↓
//!        inject_event → [input ch] → Filter::process × N → [debug ch] → await_output_event
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod logging;
pub mod registry;
pub mod runner;

pub use config::{FilterSpec, PipelineConfig};
pub use error::{PipelineError, Result};
pub use event::LogEvent;
pub use filter::Filter;
pub use registry::{FilterFactory, FilterRegistry};
pub use runner::{FilterChain, RunningPipeline};

/// Engine version, logged at pipeline start
pub const LOGPIPE_VERSION: &str = env!("CARGO_PKG_VERSION");
