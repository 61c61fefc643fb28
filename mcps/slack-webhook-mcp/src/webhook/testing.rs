//! Scripted transport for sender and server tests

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::error::TransportError;
use super::transport::{TransportResponse, WebhookTransport};

/// A posted request as seen by the transport
#[derive(Debug, Clone)]
pub struct RecordedPost {
    pub url: String,
    pub body: Value,
}

#[derive(Debug, Clone)]
enum Reply {
    Respond(u16, String),
    Fail(String),
    Panic,
}

/// Records every post and answers with a fixed reply
#[derive(Debug)]
pub struct RecordingTransport {
    reply: Reply,
    posts: Mutex<Vec<RecordedPost>>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self::with_reply(Reply::Respond(status, body.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_string()))
    }

    pub fn panicking() -> Self {
        Self::with_reply(Reply::Panic)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn posts(&self) -> Vec<RecordedPost> {
        self.posts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl WebhookTransport for RecordingTransport {
    async fn post_json(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> Result<TransportResponse, TransportError> {
        let body: Value = serde_json::from_slice(&body).expect("sender posts valid JSON");
        self.posts.lock().unwrap().push(RecordedPost {
            url: url.to_string(),
            body,
        });

        match &self.reply {
            Reply::Respond(status, body) => Ok(TransportResponse::new(*status, body.clone())),
            Reply::Fail(message) => Err(TransportError::Connection(message.clone())),
            Reply::Panic => panic!("transport exploded"),
        }
    }
}
