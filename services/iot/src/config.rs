use crate::constants::*;
use crate::Credential;
use http::Method;
use iotsign_core::{Context, Error, Result};
use log::debug;

/// Config for publishing to aws iot over https.
///
/// Built once at startup and shared read-only by the signer and the publisher.
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP method, loaded from env `method`.
    pub method: Method,
    /// Credential, loaded from env `accesskey` and `secretkey`.
    pub credential: Credential,
    /// AWS region, loaded from env `region`.
    pub region: String,
    /// Signing service name, loaded from env `service`.
    ///
    /// AWS IoT data plane uses `iotdevicegateway`.
    pub service: String,
    /// Content type of the payload, loaded from env `contenttype`.
    pub content_type: String,
    /// Host signed into the canonical headers, loaded from env `host`.
    pub host: String,
    /// Full url the request is sent to, loaded from env `endpoint`.
    pub endpoint: String,
    /// Canonical uri, loaded from env `canonicaluri`. Used verbatim.
    pub canonical_uri: String,
    /// Canonical query string, loaded from env `canonicalquerystring`. Used verbatim.
    pub canonical_query_string: String,
}

impl Config {
    /// Load config from environment variables.
    ///
    /// Every variable is required; the first missing one is reported.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let method = require(ctx, ENV_METHOD)?;
        let method = Method::from_bytes(method.as_bytes()).map_err(|e| {
            Error::config_invalid(format!("env `{ENV_METHOD}` is not a valid method: {method}"))
                .with_source(e)
        })?;

        let cfg = Self {
            method,
            credential: Credential {
                access_key_id: require(ctx, ENV_ACCESS_KEY)?,
                secret_access_key: require(ctx, ENV_SECRET_KEY)?,
            },
            region: require(ctx, ENV_REGION)?,
            service: require(ctx, ENV_SERVICE)?,
            content_type: require(ctx, ENV_CONTENT_TYPE)?,
            host: require(ctx, ENV_HOST)?,
            endpoint: require(ctx, ENV_ENDPOINT)?,
            canonical_uri: require(ctx, ENV_CANONICAL_URI)?,
            canonical_query_string: require(ctx, ENV_CANONICAL_QUERY_STRING)?,
        };
        debug!("loaded config: {cfg:?}");

        Ok(cfg)
    }
}

fn require(ctx: &Context, key: &str) -> Result<String> {
    ctx.env_var(key)
        .ok_or_else(|| Error::config_invalid(format!("env `{key}` is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotsign_core::{ErrorKind, StaticEnv};
    use std::collections::HashMap;

    fn envs() -> HashMap<String, String> {
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
            (
                ENV_ENDPOINT.to_string(),
                "https://example.iot.us-east-1.amazonaws.com/topics/sdk/test?qos=1".to_string(),
            ),
            (ENV_CANONICAL_URI.to_string(), "/topics/sdk/test".to_string()),
            (ENV_CANONICAL_QUERY_STRING.to_string(), "qos=1".to_string()),
        ])
    }

    #[test]
    fn test_config_from_env() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv { envs: envs() });

        let cfg = Config::from_env(&ctx)?;
        assert_eq!(cfg.method, Method::POST);
        assert_eq!(cfg.credential.access_key_id, "AKIDEXAMPLE");
        assert_eq!(cfg.region, "us-east-1");
        assert_eq!(cfg.service, "iotdevicegateway");
        assert_eq!(cfg.content_type, "application/json");
        assert_eq!(cfg.host, "example.iot.us-east-1.amazonaws.com");
        assert_eq!(cfg.canonical_uri, "/topics/sdk/test");
        assert_eq!(cfg.canonical_query_string, "qos=1");

        Ok(())
    }

    #[test]
    fn test_config_allows_empty_query_string() -> anyhow::Result<()> {
        let mut envs = envs();
        envs.insert(ENV_CANONICAL_QUERY_STRING.to_string(), String::new());
        let ctx = Context::new().with_env(StaticEnv { envs });

        let cfg = Config::from_env(&ctx)?;
        assert_eq!(cfg.canonical_query_string, "");

        Ok(())
    }

    #[test]
    fn test_config_missing_variable() {
        let mut envs = envs();
        envs.remove(ENV_ENDPOINT);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let err = Config::from_env(&ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.message().contains("`endpoint`"));
    }

    #[test]
    fn test_config_invalid_method() {
        let mut envs = envs();
        envs.insert(ENV_METHOD.to_string(), "PO ST".to_string());
        let ctx = Context::new().with_env(StaticEnv { envs });

        let err = Config::from_env(&ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_config_debug_is_redacted() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv { envs: envs() });

        let cfg = Config::from_env(&ctx)?;
        let s = format!("{cfg:?}");
        assert!(!s.contains("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY"));
        assert!(s.contains("iotdevicegateway"));

        Ok(())
    }
}
