use axum::http::StatusCode;

#[derive(Debug)]
pub enum AppError {
    // Malformed or missing input, reported to the client as a 400.
    Parse(String),
    // Persistence failure, reported as a 500.
    Store(String),
}

impl AppError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn store(err: impl std::error::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Parse(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Store(message) => (StatusCode::INTERNAL_SERVER_ERROR, message).into_response(),
        }
    }
}
