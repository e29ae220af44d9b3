//! JSON Responses
//!
//! Every JSON body the API writes, errors included, is labelled
//! `application/json; charset=utf-8`.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Content type of every JSON response body
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Serialize `body` with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    // Json leaves a rejection response untouched on serialization failure
    if response.status() == status {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
    }
    response
}
