//! Shared helpers for publisher integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use iotsign_core::{Context, Error, HttpSend, Result, StaticEnv};
use iotsign_iot::constants::*;
use iotsign_iot::Config;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const ENDPOINT: &str = "https://example.iot.us-east-1.amazonaws.com/topics/sdk/test?qos=1";

/// MockHttpSend records the request it receives and answers with a fixed reply.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    reply: std::result::Result<(u16, &'static str), &'static str>,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    pub fn status(status: u16, body: &'static str) -> Self {
        Self {
            reply: Ok((status, body)),
            requests: Arc::default(),
        }
    }

    /// Fail like a real transport: generic message, cause kept as the source.
    pub fn transport_error(cause: &'static str) -> Self {
        Self {
            reply: Err(cause),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<http::Request<Bytes>> {
        self.requests.lock().expect("lock poisoned").drain(..).collect()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().expect("lock poisoned").push(req);

        match self.reply {
            Ok((status, body)) => Ok(http::Response::builder()
                .status(status)
                .body(Bytes::from_static(body.as_bytes()))?),
            Err(cause) => Err(Error::unexpected("failed to send http request")
                .with_source(anyhow::anyhow!(cause))),
        }
    }
}

pub fn test_envs() -> HashMap<String, String> {
    HashMap::from([
        (ENV_METHOD.to_string(), "POST".to_string()),
        (ENV_ACCESS_KEY.to_string(), "AKIDEXAMPLE".to_string()),
        (
            ENV_SECRET_KEY.to_string(),
            "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY".to_string(),
        ),
        (ENV_REGION.to_string(), "us-east-1".to_string()),
        (ENV_SERVICE.to_string(), "iotdevicegateway".to_string()),
        (ENV_CONTENT_TYPE.to_string(), "application/json".to_string()),
        (
            ENV_HOST.to_string(),
            "example.iot.us-east-1.amazonaws.com".to_string(),
        ),
        (ENV_ENDPOINT.to_string(), ENDPOINT.to_string()),
        (ENV_CANONICAL_URI.to_string(), "/topics/sdk/test".to_string()),
        (ENV_CANONICAL_QUERY_STRING.to_string(), "qos=1".to_string()),
    ])
}

/// Build a context backed by `http` and the config loaded from it.
pub fn init_publish_test(http: MockHttpSend) -> (Context, Config) {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new()
        .with_env(StaticEnv { envs: test_envs() })
        .with_http_send(http);
    let config = Config::from_env(&ctx).expect("test config must be valid");

    (ctx, config)
}
