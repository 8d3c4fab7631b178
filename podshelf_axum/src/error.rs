use http::StatusCode;
use podshelf::{CoordinationError, SessionError};

const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Client-caused failures become 400 with their message; everything else is
/// a 500 whose details stay in the log.
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| match e {
            CoordinationError::MissingAuthorizationCode
            | CoordinationError::AuthorizationDenied(_) => {
                let e = e.log();
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_BODY.to_string(),
            ),
        })
    }
}

impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(CoordinationError::from).into_response_error()
    }
}
