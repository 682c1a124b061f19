//! Publish messages to AWS IoT Core over HTTPS with SigV4.
//!
//! ```no_run
//! use iotsign_core::{Context, OsEnv};
//! use iotsign_http_send_reqwest::ReqwestHttpSend;
//! use iotsign_iot::{Config, Publisher};
//!
//! # async fn example() -> iotsign_core::Result<()> {
//! let ctx = Context::new()
//!     .with_env(OsEnv)
//!     .with_http_send(ReqwestHttpSend::default());
//! let config = Config::from_env(&ctx)?;
//!
//! let outcome = Publisher::new(ctx, config).publish("Hello World").await?;
//! println!("{}", outcome.status);
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::authorization_header;
pub use sign_request::canonical_request_string;
pub use sign_request::credential_scope;
pub use sign_request::derive_signing_key;
pub use sign_request::string_to_sign;
pub use sign_request::SigningOutput;
pub use sign_request::SigningRequest;

mod publish;
pub use publish::PublishOutcome;
pub use publish::Publisher;

pub mod constants;
