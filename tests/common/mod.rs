//! Shared helpers for connector integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use klarna_checkout::clients::{HttpRequest, HttpResponse, Transport, TransportError};
use klarna_checkout::{BaseUri, Connector, ConnectorConfig, SharedSecret};

pub const SECRET: &str = "mySecret";

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn sent(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no queued response".to_string()))
    }
}

pub fn config() -> ConnectorConfig {
    ConnectorConfig::builder()
        .shared_secret(SharedSecret::new(SECRET).unwrap())
        .base_uri(BaseUri::new("https://mock.com").unwrap())
        .build()
        .unwrap()
}

pub fn connector(transport: &Arc<StubTransport>) -> Connector {
    Connector::with_transport(config(), transport.clone())
}

pub fn ok(body: &str) -> HttpResponse {
    HttpResponse::new(200, "OK").with_body(body)
}

pub fn redirect(code: u16, location: &str) -> HttpResponse {
    HttpResponse::new(code, "").with_header("Location", location)
}
