//! HTTP front end for the extractor.
//!
//! Every path is handled the same way: `POST` with `{"url": "..."}` runs an
//! extraction, any other method answers `hello`.

use crate::config::ExtractorConfig;
use crate::errors::ExtractionFailure;
use crate::fetchers::Fetcher;
use crate::parsers::Parser;
use crate::Extractor;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Body of an extraction request
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    kind: &'static str,
    message: String,
}

fn error_response(status: StatusCode, kind: &'static str, message: String) -> Response {
    let body = ErrorBody {
        error: ErrorDetail { kind, message },
    };
    (status, Json(body)).into_response()
}

/// Status code reported for a failed extraction
pub fn failure_status(failure: &ExtractionFailure) -> StatusCode {
    match failure {
        ExtractionFailure::Fetch(_) => StatusCode::BAD_GATEWAY,
        ExtractionFailure::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Build the router serving `extractor`
pub fn router<F, P>(extractor: Extractor<F, P>) -> Router
where
    F: Fetcher + 'static,
    P: Parser + 'static,
{
    Router::new()
        .fallback(handle::<F, P>)
        .with_state(Arc::new(extractor))
}

async fn handle<F, P>(
    State(extractor): State<Arc<Extractor<F, P>>>,
    method: Method,
    body: Bytes,
) -> Response
where
    F: Fetcher + 'static,
    P: Parser + 'static,
{
    if method != Method::POST {
        return "hello".into_response();
    }

    let request: ExtractRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            ::log::warn!("Rejecting malformed extraction request: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "bad_request", e.to_string());
        }
    };

    ::log::info!("Extracting {}", request.url);

    match extractor.extract(&request.url).await {
        Ok(result) => Json(result).into_response(),
        Err(failure) => {
            ::log::warn!("Extraction of {} failed: {}", request.url, failure);
            error_response(
                failure_status(&failure),
                failure.kind().as_str(),
                failure.to_string(),
            )
        }
    }
}

/// Bind the configured address and serve until the process exits
pub async fn serve(config: &ExtractorConfig) -> Result<(), Box<dyn Error>> {
    let extractor = Extractor::from_config(config)?;
    let listener = TcpListener::bind(config.bind_address()).await?;

    ::log::info!(
        "HTTP server running. Access it at: http://{}/",
        listener.local_addr()?
    );

    axum::serve(listener, router(extractor)).await?;
    Ok(())
}
