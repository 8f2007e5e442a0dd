use http::{header::HOST, HeaderMap, Uri};
use url::Url;

use crate::{resolve_origin, Error400};

/// The request URL as this server received it.
///
/// Absolute-form URIs are taken as-is. Origin-form URIs are rebuilt from the
/// `Host` header on `http`, the scheme of the plain listener.
pub fn request_url(uri: &Uri, headers: &HeaderMap) -> Result<Url, Error400> {
    if uri.scheme().is_some() && uri.authority().is_some() {
        return Ok(Url::parse(&uri.to_string())?);
    }
    let host = match headers.get(HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| Error400::InvalidHeaderString(HOST))?,
        None => return Err(Error400::MissingHost),
    };
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    Ok(Url::parse(&format!("http://{host}{path_and_query}"))?)
}

/// Public URL of the request: origin from the forwarding headers, path, query
/// and fragment from the request itself.
pub fn resolve_public_url(uri: &Uri, headers: &HeaderMap) -> Result<Url, Error400> {
    let literal = request_url(uri, headers)?;
    let origin = resolve_origin(headers, &literal);
    let mut public = Url::parse(&origin)?;
    public.set_path(literal.path());
    public.set_query(literal.query());
    public.set_fragment(literal.fragment());
    Ok(public)
}
