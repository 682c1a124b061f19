use crate::constants::{ALGORITHM, AWS4_REQUEST, SIGNED_HEADERS};
use crate::{Config, Credential};
use bytes::Bytes;
use http::Method;
use iotsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use iotsign_core::time::{format_date, format_iso8601, DateTime};
use iotsign_core::{Error, Result};
use log::debug;
use std::fmt::Write;

/// Everything needed to sign one publish request with AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Signing is a pure function of this struct: the same request always
/// yields the same signature.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// Canonical uri, already encoded.
    pub canonical_uri: String,
    /// Canonical query string, already sorted and encoded.
    pub canonical_query_string: String,
    /// Value of the `host` header.
    pub host: String,
    /// Value of the `content-type` header.
    pub content_type: String,
    /// Request body.
    pub payload: Bytes,
    /// AWS region.
    pub region: String,
    /// Signing service name.
    pub service: String,
    /// Credential used for signing.
    pub credential: Credential,
    /// Signing time.
    pub time: DateTime,
}

/// Headers produced by signing that must be sent along with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningOutput {
    /// Value of the `X-Amz-Date` header: `20220313T072004Z`
    pub amz_date: String,
    /// Value of the `Authorization` header.
    pub authorization: String,
}

impl SigningRequest {
    /// Build a signing request from config, payload and signing time.
    pub fn new(cfg: &Config, payload: Bytes, time: DateTime) -> Self {
        Self {
            method: cfg.method.clone(),
            canonical_uri: cfg.canonical_uri.clone(),
            canonical_query_string: cfg.canonical_query_string.clone(),
            host: cfg.host.clone(),
            content_type: cfg.content_type.clone(),
            payload,
            region: cfg.region.clone(),
            service: cfg.service.clone(),
            credential: cfg.credential.clone(),
            time,
        }
    }

    /// Sign this request.
    pub fn sign(&self) -> Result<SigningOutput> {
        if !self.credential.is_valid() {
            return Err(Error::credential_invalid(
                "access key and secret key must not be empty",
            ));
        }

        let amz_date = format_iso8601(self.time);
        let date_stamp = format_date(self.time);

        let payload_hash = hex_sha256(&self.payload);
        let creq = canonical_request_string(self, &amz_date, &payload_hash)?;
        let encoded_req = hex_sha256(creq.as_bytes());

        let scope = credential_scope(&date_stamp, &self.region, &self.service);
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(&amz_date, &scope, &encoded_req)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = derive_signing_key(
            &self.credential.secret_access_key,
            &date_stamp,
            &self.region,
            &self.service,
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let authorization = authorization_header(
            &self.credential.access_key_id,
            &scope,
            SIGNED_HEADERS,
            &signature,
        );

        Ok(SigningOutput {
            amz_date,
            authorization,
        })
    }
}

/// Build the canonical request.
///
/// ```text
/// POST
/// /topics/sdk/test
/// qos=1
/// content-type:application/json
/// host:example.iot.us-east-1.amazonaws.com
/// x-amz-date:20230501T123456Z
///
/// content-type;host;x-amz-date
/// <hex_sha256_of_payload>
/// ```
pub fn canonical_request_string(
    req: &SigningRequest,
    amz_date: &str,
    payload_hash: &str,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", req.method)?;
    writeln!(f, "{}", req.canonical_uri)?;
    writeln!(f, "{}", req.canonical_query_string)?;
    // Canonical headers, lowercase names in signed order.
    writeln!(f, "content-type:{}", req.content_type)?;
    writeln!(f, "host:{}", req.host)?;
    writeln!(f, "x-amz-date:{amz_date}")?;
    writeln!(f)?;
    writeln!(f, "{SIGNED_HEADERS}")?;
    write!(f, "{payload_hash}")?;

    Ok(f)
}

/// Scope: "20220313/<region>/<service>/aws4_request"
pub fn credential_scope(date_stamp: &str, region: &str, service: &str) -> String {
    format!("{date_stamp}/{region}/{service}/{AWS4_REQUEST}")
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    amz_date: &str,
    scope: &str,
    hashed_canonical_request: &str,
) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "{ALGORITHM}")?;
    writeln!(f, "{amz_date}")?;
    writeln!(f, "{scope}")?;
    write!(f, "{hashed_canonical_request}")?;
    Ok(f)
}

/// Derive the signing key through the four chained HMAC-SHA256 steps.
///
/// Each step keys the next one with its raw 32-byte output.
pub fn derive_signing_key(
    secret: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}

/// Assemble the `Authorization` header value.
pub fn authorization_header(
    access_key_id: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{ALGORITHM} Credential={access_key_id}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}
