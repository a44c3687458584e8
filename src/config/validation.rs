//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic checks that serde cannot express (non-empty values, ranges)
//! - Separate checks for the connection settings and for a deployment
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function of `QuizConfig`

use thiserror::Error;

use crate::config::schema::{keys, QuizConfig};

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("malformed entry: {0}")]
    Malformed(String),
}

/// Check the settings needed to reach the network and unlock the keystore.
pub fn validate_connection(config: &QuizConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.gateway.trim().is_empty() {
        errors.push(ValidationError::Missing(keys::GATEWAY));
    } else if let Err(e) = url::Url::parse(config.gateway.trim()) {
        errors.push(ValidationError::Invalid {
            key: keys::GATEWAY,
            reason: e.to_string(),
        });
    }

    if config.keystore_path.as_os_str().is_empty() {
        errors.push(ValidationError::Missing(keys::KEYSTORE));
    }

    if config.rpc_timeout_secs == 0 {
        errors.push(ValidationError::Invalid {
            key: keys::RPC_TIMEOUT_SECS,
            reason: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check that a deployment would carry a real question and answer.
pub fn validate_deployment(config: &QuizConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.question.trim().is_empty() {
        errors.push(ValidationError::Missing(keys::QUESTION));
    }
    if config.answer.is_empty() {
        errors.push(ValidationError::Missing(keys::ANSWER));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connectable() -> QuizConfig {
        QuizConfig {
            gateway: "http://localhost:8545".to_string(),
            keystore_path: "keystore/UTC--key".into(),
            ..QuizConfig::default()
        }
    }

    #[test]
    fn test_valid_connection() {
        assert!(validate_connection(&connectable()).is_ok());
    }

    #[test]
    fn test_connection_reports_every_error() {
        let config = QuizConfig {
            rpc_timeout_secs: 0,
            ..QuizConfig::default()
        };
        let errors = validate_connection(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::Missing(keys::GATEWAY)));
        assert!(errors.contains(&ValidationError::Missing(keys::KEYSTORE)));
    }

    #[test]
    fn test_malformed_gateway() {
        let config = QuizConfig {
            gateway: "not a url".to_string(),
            ..connectable()
        };
        let errors = validate_connection(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::Invalid { key: keys::GATEWAY, .. }
        ));
    }

    #[test]
    fn test_deployment_requires_question_and_answer() {
        let errors = validate_deployment(&QuizConfig::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Missing(keys::QUESTION),
                ValidationError::Missing(keys::ANSWER),
            ]
        );

        let config = QuizConfig {
            question: "2+2?".to_string(),
            answer: "4".to_string(),
            ..QuizConfig::default()
        };
        assert!(validate_deployment(&config).is_ok());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::Missing(keys::ANSWER).to_string(),
            "ANSWER must not be empty"
        );
    }
}
