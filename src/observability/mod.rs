//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!
//! Consumers:
//!     → logging.rs subscriber → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
