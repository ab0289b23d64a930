use crate::operation::Operation;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0} failed:\nStatusCode: {1}\nText: {2}")]
    Response(Operation, StatusCode, String),

    #[error("Failed to deserialize {0} response: {1}")]
    Deserialize(Operation, String),

    #[error("{0} returned errors: {1}")]
    Graphql(Operation, String),

    #[error("{0} response contains no data")]
    MissingData(Operation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_errors_carry_status_and_body() {
        let error = Error::Response(
            Operation::MyCards,
            StatusCode::UNAUTHORIZED,
            "signature invalid".to_string(),
        );

        let message = error.to_string();
        assert!(message.contains("myCards"));
        assert!(message.contains("401"));
        assert!(message.contains("signature invalid"));
    }
}
