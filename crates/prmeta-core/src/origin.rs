//! Recovers the origin a client actually used when the service runs behind
//! reverse proxies.
//!
//! Precedence is `X-Forwarded-Host`/`X-Forwarded-Proto`, then the first
//! element of RFC 7239 `Forwarded`, then the literal request URL. Proxies are
//! trusted for scheme and host only, and an unknown scheme is always `https`.

use http::{header::FORWARDED, HeaderMap, HeaderName};
use url::{Position, Url};

pub const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");
pub const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

pub const DEFAULT_FORWARDED_PROTO: &str = "https";

/// Host and scheme a proxy reported for the original request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardingHint {
    pub host: Option<String>,
    pub proto: Option<String>,
}

impl ForwardingHint {
    /// Reads `X-Forwarded-Host` and `X-Forwarded-Proto`, leftmost value of each.
    pub fn from_x_forwarded(headers: &HeaderMap) -> Option<Self> {
        let host = header_str(headers, &X_FORWARDED_HOST).and_then(first_token)?;
        let proto = header_str(headers, &X_FORWARDED_PROTO).and_then(first_token);
        Some(Self {
            host: Some(host.to_string()),
            proto: proto.map(str::to_string),
        })
    }

    /// Reads the first element of an RFC 7239 `Forwarded` header.
    pub fn from_forwarded(headers: &HeaderMap) -> Option<Self> {
        let value = header_str(headers, &FORWARDED)?;
        let hint = parse_forwarded_element(value);
        hint.host.is_some().then_some(hint)
    }

    /// `proto://host`, or `None` when no host was forwarded.
    pub fn origin(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        let proto = self.proto.as_deref().unwrap_or(DEFAULT_FORWARDED_PROTO);
        Some(format!("{proto}://{host}"))
    }
}

/// Parses `host` and `proto` out of the first comma separated element of a
/// `Forwarded` value. Malformed pairs are skipped.
pub fn parse_forwarded_element(value: &str) -> ForwardingHint {
    let element = value.split(',').next().unwrap_or_default();
    let mut hint = ForwardingHint::default();
    for pair in element.split(';') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = unquote(value.trim());
        if value.is_empty() {
            continue;
        }
        match key.trim().to_ascii_lowercase().as_str() {
            "host" => hint.host = Some(value.to_string()),
            "proto" => hint.proto = Some(value.to_string()),
            _ => {}
        }
    }
    hint
}

/// Origin (`scheme://host[:port]`) the client sees for this request.
pub fn resolve_origin(headers: &HeaderMap, request_url: &Url) -> String {
    if let Some(origin) = ForwardingHint::from_x_forwarded(headers).and_then(|h| h.origin()) {
        tracing::debug!(%origin, "origin resolved from x-forwarded-host");
        return origin;
    }
    if let Some(origin) = ForwardingHint::from_forwarded(headers).and_then(|h| h.origin()) {
        tracing::debug!(%origin, "origin resolved from forwarded");
        return origin;
    }
    let origin = url_origin(request_url);
    tracing::debug!(%origin, "origin resolved from request url");
    origin
}

/// `scheme://host[:port]` of a URL, without userinfo. Unlike `Url::origin`,
/// schemes outside the special list keep their host instead of becoming `null`.
pub fn url_origin(url: &Url) -> String {
    format!(
        "{}://{}",
        url.scheme(),
        &url[Position::BeforeHost..Position::AfterPort]
    )
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn first_token(value: &str) -> Option<&str> {
    let token = value.split(',').next()?.trim();
    (!token.is_empty()).then_some(token)
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
