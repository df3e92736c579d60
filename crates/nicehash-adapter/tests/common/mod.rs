/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for nicehash-adapter tests

use async_trait::async_trait;
use nicehash_adapter::{Credentials, NicehashError, Result, Transport, TransportResponse};
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use std::collections::VecDeque;
use std::sync::Mutex;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn fake_credentials() -> Credentials {
    Credentials::new("FAKEID", "FAKEKEY")
}

/// Transport that replays canned outcomes and records requested URLs
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<TransportResponse>>>,
    requests: Mutex<Vec<Url>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn respond(self, status: StatusCode, body: &str) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(TransportResponse {
            status,
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    pub fn fail(self, message: &'static str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(NicehashError::transport(message)));
        self
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(url.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(NicehashError::transport("no scripted response left")))
    }
}
