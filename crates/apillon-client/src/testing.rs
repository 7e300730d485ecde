//! Recording transport for unit tests

use crate::{
    transport::{SignedPutResponse, Transport},
    ApillonClient, ClientError, Config, Result,
};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    Post {
        path: String,
        body: Option<Value>,
    },
    Put {
        url: String,
        body: Bytes,
    },
    Delete {
        path: String,
    },
}

impl Call {
    /// GET without query parameters
    pub(crate) fn get(path: &str) -> Self {
        Self::Get {
            path: path.to_string(),
            query: Vec::new(),
        }
    }

    pub(crate) fn delete(path: &str) -> Self {
        Self::Delete {
            path: path.to_string(),
        }
    }
}

enum Reply {
    Body(String),
    Status(u16, String),
}

/// Replays scripted replies in order and records every call.
///
/// API calls without a scripted reply get an empty envelope; signed PUTs
/// without one get a 200.
#[derive(Default)]
pub(crate) struct MockTransport {
    calls: Mutex<Vec<Call>>,
    api_replies: Mutex<VecDeque<Reply>>,
    put_replies: Mutex<VecDeque<Reply>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, body: impl Into<String>) {
        self.api_replies.lock().push_back(Reply::Body(body.into()));
    }

    pub(crate) fn fail(&self, status: u16, body: impl Into<String>) {
        self.api_replies
            .lock()
            .push_back(Reply::Status(status, body.into()));
    }

    pub(crate) fn put_status(&self, status: u16, body: impl Into<String>) {
        self.put_replies
            .lock()
            .push_back(Reply::Status(status, body.into()));
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub(crate) fn puts(&self) -> Vec<(String, Bytes)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Put { url, body } => Some((url, body)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn finalize_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Post { path, .. } if path.ends_with("/end")))
            .count()
    }

    fn api_reply(&self, call: Call) -> Result<String> {
        self.calls.lock().push(call);
        match self.api_replies.lock().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status, body)) => Err(ClientError::Api { status, body }),
            None => Ok(json!({"id": "mock", "status": 200, "data": {}}).to_string()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        self.api_reply(Call::Get {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        })
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> Result<String> {
        self.api_reply(Call::Post {
            path: path.to_string(),
            body: body.cloned(),
        })
    }

    async fn put_signed(&self, url: &str, body: Bytes) -> Result<SignedPutResponse> {
        self.calls.lock().push(Call::Put {
            url: url.to_string(),
            body,
        });
        let (status, body) = match self.put_replies.lock().pop_front() {
            Some(Reply::Status(status, body)) => (status, body),
            Some(Reply::Body(body)) => (200, body),
            None => (200, String::new()),
        };
        Ok(SignedPutResponse { status, body })
    }

    async fn delete(&self, path: &str) -> Result<String> {
        self.api_reply(Call::Delete {
            path: path.to_string(),
        })
    }
}

pub(crate) fn test_client(mock: &Arc<MockTransport>) -> ApillonClient {
    let config = Config::new("test-key").with_settle_delay(Duration::ZERO);
    ApillonClient::with_transport(config, mock.clone())
}

/// Negotiate response with one slot per URL
pub(crate) fn session_reply(session: &str, urls: &[&str]) -> String {
    let files: Vec<Value> = urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            json!({
                "fileUuid": format!("file-{}", i),
                "fileName": format!("file-{}.txt", i),
                "contentType": "text/plain",
                "url": url,
                "path": null
            })
        })
        .collect();

    json!({
        "id": "negotiate",
        "status": 201,
        "data": {"sessionUuid": session, "files": files}
    })
    .to_string()
}
