//! Response sink abstraction used by page handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Body handed to a response sink: a list of lines or a single message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    List(Vec<String>),
    Text(String),
}

impl From<Vec<String>> for ResponseBody {
    fn from(items: Vec<String>) -> Self {
        ResponseBody::List(items)
    }
}

impl From<&str> for ResponseBody {
    fn from(text: &str) -> Self {
        ResponseBody::Text(text.to_string())
    }
}

impl From<String> for ResponseBody {
    fn from(text: String) -> Self {
        ResponseBody::Text(text)
    }
}

/// Destination of a handler's single response write
pub trait ResponseSink {
    fn send(&mut self, body: ResponseBody);
}

/// Sink that holds the body until axum turns it into an HTTP response.
///
/// A list becomes a JSON array, text becomes a plain-text body. Only the
/// first body sent is kept.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    body: Option<ResponseBody>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self) -> Option<&ResponseBody> {
        self.body.as_ref()
    }
}

impl ResponseSink for BufferedResponse {
    fn send(&mut self, body: ResponseBody) {
        if self.body.is_some() {
            tracing::warn!("Response already sent, dropping second body");
            return;
        }
        self.body = Some(body);
    }
}

impl IntoResponse for BufferedResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(ResponseBody::List(items)) => (StatusCode::OK, Json(items)).into_response(),
            Some(ResponseBody::Text(text)) => (StatusCode::OK, text).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        }
    }
}
