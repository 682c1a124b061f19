//! Core components shared by the iotsign crates.
//!
//! This crate holds the pieces that are not specific to one service:
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Error**: The error type returned by every fallible operation
//! - [`hash`]: SHA256 and HMAC-SHA256 helpers used by SigV4
//! - [`time`]: UTC time helpers and the date formats SigV4 needs
//! - [`utils`]: General utilities including data redaction
//!
//! ## Example
//!
//! ```
//! use iotsign_core::{Context, StaticEnv};
//! use std::collections::HashMap;
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([("region".to_string(), "us-east-1".to_string())]),
//! });
//!
//! assert_eq!(ctx.env_var("region").as_deref(), Some("us-east-1"));
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;
