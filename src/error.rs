use thiserror::Error;

/// Failure talking to the calculation service
///
/// Carries enough detail for logging; the presentation layer only needs to
/// know that the request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Service answered with a non-2xx status
    #[error("Calculation service returned status {0}")]
    Status(u16),
    /// Response body was not a valid calculation result
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
    /// Request never completed (connection, DNS, timeout)
    #[error("Request failed: {0}")]
    Transport(String),
}

impl NetworkError {
    /// HTTP status code, if the service responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }

    /// Short machine-readable kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::MalformedBody(_) => "malformed_body",
            Self::Transport(_) => "transport",
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedBody(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NetworkError::Status(500).to_string(),
            "Calculation service returned status 500"
        );
    }

    #[test]
    fn test_status_only_for_status_errors() {
        assert_eq!(NetworkError::Status(503).status(), Some(503));
        assert_eq!(NetworkError::Transport("refused".to_string()).status(), None);
    }

    #[test]
    fn test_json_error_is_malformed_body() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let network: NetworkError = err.into();
        assert_eq!(network.kind(), "malformed_body");
    }
}
