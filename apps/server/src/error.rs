use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stockeval_core::errors::Error as CoreError;
use thiserror::Error;

const INVALID_TICKER_FORMAT: &str = "INVALID_TICKER_FORMAT";
const TICKER_NOT_FOUND: &str = "TICKER_NOT_FOUND";
const YAHOO_CLIENT_ERROR: &str = "YAHOO_CLIENT_ERROR";

/// A core error tagged with the symbol exactly as the client sent it.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct ApiError {
    source: CoreError,
    raw_symbol: String,
}

impl ApiError {
    pub fn new(source: CoreError, raw_symbol: impl Into<String>) -> Self {
        Self {
            source,
            raw_symbol: raw_symbol.into(),
        }
    }

    /// Attach the raw symbol to a core result.
    pub fn wrap(raw_symbol: &str) -> impl FnOnce(CoreError) -> Self + '_ {
        move |source| Self::new(source, raw_symbol)
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.source {
            CoreError::InvalidTicker(_) => (StatusCode::UNPROCESSABLE_ENTITY, INVALID_TICKER_FORMAT),
            e if e.is_not_found() => (StatusCode::NOT_FOUND, TICKER_NOT_FOUND),
            _ => (StatusCode::BAD_GATEWAY, YAHOO_CLIENT_ERROR),
        }
    }

    fn details(&self, code: &str) -> String {
        match code {
            INVALID_TICKER_FORMAT => format!("Got '{}'.", self.raw_symbol),
            TICKER_NOT_FOUND => format!("Symbol '{}' does not exist.", self.raw_symbol),
            _ => "Error occurred while communicating with Yahoo Finance.".to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::warn!("Upstream failure for '{}': {}", self.raw_symbol, self.source);
        }
        let body = Json(ErrorBody {
            error: code,
            message: self.source.to_string(),
            details: Some(self.details(code)),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
