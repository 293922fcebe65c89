use crate::shared::error::PublishError;

/// PublishOutcome - result of a publish call that ran to completion
///
/// A failed upload is an outcome, not an error: by default it must not
/// break the build step that invoked the publisher.
#[derive(Debug)]
pub enum PublishOutcome {
    /// The server accepted the BOM
    Delivered {
        /// Raw response body, typically `{"token":"..."}`
        response: String,
    },
    /// The request failed on the wire and was logged
    Failed { error: PublishError },
}

impl PublishOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, PublishOutcome::Delivered { .. })
    }

    /// Response body of a delivered BOM
    pub fn response(&self) -> Option<&str> {
        match self {
            PublishOutcome::Delivered { response } => Some(response),
            PublishOutcome::Failed { .. } => None,
        }
    }

    /// Network error of a failed upload
    pub fn error(&self) -> Option<&PublishError> {
        match self {
            PublishOutcome::Delivered { .. } => None,
            PublishOutcome::Failed { error } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivered_accessors() {
        let outcome = PublishOutcome::Delivered {
            response: r#"{"token":"abc"}"#.to_string(),
        };
        assert!(outcome.is_delivered());
        assert_eq!(outcome.response(), Some(r#"{"token":"abc"}"#));
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_failed_accessors() {
        let outcome = PublishOutcome::Failed {
            error: PublishError::HttpStatus {
                status: 500,
                message: "boom".to_string(),
            },
        };
        assert!(!outcome.is_delivered());
        assert!(outcome.response().is_none());
        assert!(matches!(
            outcome.error(),
            Some(PublishError::HttpStatus { status: 500, .. })
        ));
    }
}
