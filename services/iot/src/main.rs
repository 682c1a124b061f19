use anyhow::Result;
use bytes::Bytes;
use iotsign_core::{Context, OsEnv};
use iotsign_http_send_reqwest::ReqwestHttpSend;
use iotsign_iot::constants::DEFAULT_PAYLOAD;
use iotsign_iot::{Config, Publisher};
use log::debug;
use std::ffi::OsString;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first so that `RUST_LOG` set there reaches the logger.
    let dotenv_result = dotenv::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A missing .env file is fine, variables may come from the process env.
    if let Err(err) = dotenv_result {
        debug!("no .env file loaded: {err}");
    }

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());

    let config = Config::from_env(&ctx)?;
    let payload = payload_from_args(std::env::args_os());

    let outcome = Publisher::new(ctx, config).publish(payload).await?;
    if !outcome.is_success() {
        anyhow::bail!("publish rejected with status {}", outcome.status);
    }

    Ok(())
}

/// Payload is the first argument taken as raw bytes, or `Hello World`.
fn payload_from_args(args: impl IntoIterator<Item = OsString>) -> Bytes {
    args.into_iter()
        .nth(1)
        .map(|arg| Bytes::from(arg.into_encoded_bytes()))
        .unwrap_or_else(|| Bytes::from_static(DEFAULT_PAYLOAD.as_bytes()))
}
