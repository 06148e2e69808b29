use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const UPSTREAM_MESSAGE: &str = "Session service unavailable";

/// Error returned from handlers and middleware.
///
/// Renders as `{"error": "<message>"}` with the carried status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn method_not_allowed<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, err)
    }

    /// Failure of a collaborator the request depended on (session lookup, storage).
    ///
    /// The response body carries only [`UPSTREAM_MESSAGE`]; the cause stays
    /// in the error chain for logging.
    pub fn upstream<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            Into::<Error>::into(err).context(UPSTREAM_MESSAGE),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use http_body_util::BodyExt;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(
            AppError::internal(anyhow!("boom")).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::not_found(anyhow!("missing")).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::method_not_allowed(anyhow!("nope")).status,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_from_io_error_is_internal() {
        let err: AppError = std::io::Error::other("disk gone").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error.to_string(), "disk gone");
    }

    #[tokio::test]
    async fn test_upstream_hides_cause_from_body() {
        let err = AppError::upstream(anyhow!("password authentication failed for user nt"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(format!("{:#}", err.error).contains("password authentication failed"));

        let body = err.into_response().into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], UPSTREAM_MESSAGE);
    }

    #[tokio::test]
    async fn test_into_response_renders_json_body() {
        let response = AppError::not_found(anyhow!("Unknown auth endpoint")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Unknown auth endpoint");
    }
}
