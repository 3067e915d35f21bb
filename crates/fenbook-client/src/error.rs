use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A response arrived carrying a structured error payload.
    #[error("server rejected the request: {0}")]
    Server(String),

    /// The request went out but no response came back.
    #[error("could not reach the rendering service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid service URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to save the document: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// The three user-facing failure classes. Each gets distinct wording in
/// notifications; the full error detail goes to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Server,
    Transport,
    Unexpected,
}

impl ClientError {
    pub fn class(&self) -> FailureClass {
        match self {
            ClientError::Server(_) => FailureClass::Server,
            ClientError::Transport(_) => FailureClass::Transport,
            ClientError::Url(_) | ClientError::Io(_) | ClientError::Unexpected(_) => {
                FailureClass::Unexpected
            }
        }
    }

    /// Short notification text, one distinct wording per failure class.
    pub fn user_message(&self) -> String {
        match self.class() {
            FailureClass::Server => format!("The service reported an error: {self}"),
            FailureClass::Transport => "No response from the rendering service".to_string(),
            FailureClass::Unexpected => format!("Something went wrong: {self}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_classify_as_server() {
        let err = ClientError::Server("bad fens".to_string());
        assert_eq!(err.class(), FailureClass::Server);
        assert!(err.user_message().contains("bad fens"));
    }

    #[test]
    fn test_io_and_url_errors_classify_as_unexpected() {
        let err = ClientError::Unexpected("boom".to_string());
        assert_eq!(err.class(), FailureClass::Unexpected);

        let err: ClientError = std::io::Error::other("disk full").into();
        assert_eq!(err.class(), FailureClass::Unexpected);
    }
}
