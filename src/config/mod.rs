//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (KEY=value)
//!     → store.rs (parse, keep every entry, rewrite on update)
//!     → schema.rs (typed QuizConfig with defaults)
//!     → validation.rs (semantic checks)
//!     → passed by reference to the client, session and provisioner
//!
//! After a deployment:
//!     provisioner sets CONTRACTADDR
//!     → store.rs rewrites the file
//! ```
//!
//! # Design Decisions
//! - No process-wide state: the store and config are owned by `main`
//! - All keys have defaults to allow minimal env files
//! - Validation separates syntactic (serde) from semantic checks

pub mod schema;
pub mod store;
pub mod validation;

pub use schema::{keys, QuizConfig};
pub use store::EnvStore;
pub use validation::ValidationError;

/// Error type for configuration loading and persistence.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}
