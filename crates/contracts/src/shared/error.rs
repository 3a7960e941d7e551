use serde::{Deserialize, Serialize};

/// Результат клиентской операции (запрос к админке, разбор ответа)
pub type ClientResult<T> = Result<T, ClientError>;

/// Ошибка клиентской операции
///
/// `code` соответствует виду сбоя (см. константы ниже).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ClientError {
    pub const NETWORK: &'static str = "NETWORK_ERROR";
    pub const SERVER: &'static str = "SERVER_ERROR";
    pub const PARSE: &'static str = "PARSE_ERROR";
    /// Запрос не удалось собрать на клиенте
    pub const REQUEST: &'static str = "REQUEST_ERROR";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(Self::NETWORK, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(Self::SERVER, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(Self::PARSE, message)
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::new(Self::REQUEST, message)
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_message_and_details() {
        let err = ClientError::server("HTTP 500").with_details("Internal Server Error");
        assert_eq!(err.to_string(), "[SERVER_ERROR] HTTP 500: Internal Server Error");
    }

    #[test]
    fn request_errors_have_their_own_code() {
        let err = ClientError::request("Failed to build request");
        assert_eq!(err.code, ClientError::REQUEST);
        assert!(err.details.is_none());
        assert_eq!(err.to_string(), "[REQUEST_ERROR] Failed to build request");
    }
}
