use crate::constants::X_AMZ_DATE;
use crate::{Config, SigningRequest};
use bytes::Bytes;
use http::{header, HeaderValue, StatusCode};
use iotsign_core::time::{now, DateTime};
use iotsign_core::{Context, Result};
use log::{error, info, warn};

/// Publisher signs one payload and sends it to the configured endpoint.
///
/// `publish` consumes the publisher: every instance sends exactly one
/// request, without retry.
#[derive(Debug)]
pub struct Publisher {
    ctx: Context,
    config: Config,

    time: Option<DateTime>,
}

/// Status and body returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Response body, lossily decoded as utf-8.
    pub body: String,
}

impl PublishOutcome {
    /// Returns true if the endpoint accepted the message with `200 OK`.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

impl Publisher {
    /// Create a new publisher.
    pub fn new(ctx: Context, config: Config) -> Self {
        Self {
            ctx,
            config,

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign `payload` and send it.
    ///
    /// - `200 OK` is logged as successful.
    /// - Any other status is logged as a warning and still returned.
    /// - Transport errors are logged and returned as `Err`.
    pub async fn publish(self, payload: impl Into<Bytes>) -> Result<PublishOutcome> {
        let payload = payload.into();
        let time = self.time.unwrap_or_else(now);

        let output = SigningRequest::new(&self.config, payload.clone(), time).sign()?;

        let mut authorization = HeaderValue::from_str(&output.authorization)?;
        authorization.set_sensitive(true);

        // Host is filled in by the transport.
        let req = http::Request::builder()
            .method(self.config.method.clone())
            .uri(self.config.endpoint.as_str())
            .header(header::CONTENT_TYPE, self.config.content_type.as_str())
            .header(X_AMZ_DATE, output.amz_date.as_str())
            .header(header::AUTHORIZATION, authorization)
            .body(payload)?;

        info!("request url: {}", self.config.endpoint);

        let resp = match self.ctx.http_send_as_string(req).await {
            Ok(resp) => resp,
            Err(err) => {
                // Debug keeps the source chain, which carries the transport cause.
                error!("error\n{err:?}");
                return Err(err);
            }
        };

        let outcome = PublishOutcome {
            status: resp.status(),
            body: resp.into_body(),
        };

        if outcome.is_success() {
            info!("sucessful");
            info!("Http Status Code {}", outcome.status.as_u16());
            info!("{}", outcome.body);
        } else {
            warn!(
                "publish not accepted, Http Status Code {}: {}",
                outcome.status.as_u16(),
                outcome.body
            );
        }

        Ok(outcome)
    }
}
