#![allow(dead_code)]

use std::cell::RefCell;

use serde_json::Value;

use carpool_core::transport::{FetchResponse, PostResponse, Transport, TransportError};

/// In-memory transport that serves a scripted fetch response and records
/// every post it receives.
pub struct FakeTransport {
    fetch_status: u16,
    fetch_body: Value,
    fail_fetch: bool,
    post_status: u16,
    posts: RefCell<Vec<(String, String)>>,
}

impl FakeTransport {
    pub fn serving(status: u16, body: Value) -> Self {
        Self {
            fetch_status: status,
            fetch_body: body,
            fail_fetch: false,
            post_status: 200,
            posts: RefCell::new(Vec::new()),
        }
    }

    /// Transport whose fetch fails at the connection level.
    pub fn unreachable() -> Self {
        let mut transport = Self::serving(200, Value::Null);
        transport.fail_fetch = true;
        transport
    }

    pub fn with_post_status(mut self, status: u16) -> Self {
        self.post_status = status;
        self
    }

    pub fn posted_bodies(&self) -> Vec<String> {
        self.posts
            .borrow()
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn post_count(&self) -> usize {
        self.posts.borrow().len()
    }
}

impl Transport for FakeTransport {
    fn get(&self, _url: &str) -> Result<FetchResponse, TransportError> {
        if self.fail_fetch {
            // A refused connection surfaces as a reqwest error in the real
            // transport; port 9 (discard) reproduces one without a server.
            let err = reqwest::blocking::get("http://127.0.0.1:9")
                .expect_err("sentinel endpoint must be unreachable");
            return Err(TransportError::Http(err));
        }
        Ok(FetchResponse {
            status: self.fetch_status,
            body: self.fetch_body.clone(),
        })
    }

    fn post(&self, url: &str, body: &str) -> Result<PostResponse, TransportError> {
        self.posts
            .borrow_mut()
            .push((url.to_string(), body.to_string()));
        Ok(PostResponse {
            status: self.post_status,
            body: "ok".to_string(),
        })
    }
}

/// The fixed dataset used by the round-trip tests.
pub fn fixture_dataset() -> Value {
    serde_json::from_str(include_str!("../fixtures/dataset.json"))
        .expect("fixture dataset must be valid JSON")
}
