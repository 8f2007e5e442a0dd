use url::Url;

use crate::url_origin;

pub const WELL_KNOWN_PREFIX: &str = "/.well-known/";

/// Strips a leading `/.well-known/<name>` where `<name>` is exactly one
/// non-empty segment. Paths without that prefix are returned unchanged.
pub fn strip_well_known(path: &str) -> &str {
    let Some(rest) = path.strip_prefix(WELL_KNOWN_PREFIX) else {
        return path;
    };
    let end = rest.find('/').unwrap_or(rest.len());
    if end == 0 {
        return path;
    }
    &rest[end..]
}

/// Canonical resource identifier for a metadata request URL.
///
/// `https://rs.example/.well-known/oauth-protected-resource/api?v=1` maps to
/// `https://rs.example/api?v=1`. An empty remaining path yields the bare
/// origin, never `https://rs.example/`, unless a query follows, which keeps
/// the serialized `https://rs.example/?v=1` form. The fragment is dropped.
pub fn map_to_resource_identifier(public_url: &Url) -> String {
    let mut resource = url_origin(public_url);
    let path = match strip_well_known(public_url.path()) {
        "" => "/",
        path => path,
    };
    let query = public_url.query();
    // `Url` reports an empty path as "/"
    if path != "/" || query.is_some() {
        resource.push_str(path);
    }
    if let Some(query) = query {
        resource.push('?');
        resource.push_str(query);
    }
    resource
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(url: &str) -> String {
        map_to_resource_identifier(&Url::parse(url).unwrap())
    }

    #[test]
    fn default_suffix_maps_to_bare_origin() {
        assert_eq!(
            map("https://resource-server.com/.well-known/oauth-protected-resource"),
            "https://resource-server.com"
        );
    }

    #[test]
    fn trailing_slash_after_suffix_maps_to_bare_origin() {
        assert_eq!(
            map("https://resource-server.com/.well-known/oauth-protected-resource/"),
            "https://resource-server.com"
        );
    }

    #[test]
    fn sub_path_is_preserved() {
        assert_eq!(
            map("https://resource-server.com/.well-known/oauth-protected-resource/my-resource"),
            "https://resource-server.com/my-resource"
        );
        assert_eq!(
            map("https://resource-server.com/.well-known/oauth-protected-resource/a/b"),
            "https://resource-server.com/a/b"
        );
    }

    #[test]
    fn non_default_port_is_kept() {
        assert_eq!(
            map("https://resource-server.com:8443/.well-known/oauth-protected-resource"),
            "https://resource-server.com:8443"
        );
    }

    #[test]
    fn default_port_is_dropped() {
        assert_eq!(
            map("https://resource-server.com:443/.well-known/oauth-protected-resource"),
            "https://resource-server.com"
        );
    }

    #[test]
    fn any_single_segment_suffix_is_stripped() {
        assert_eq!(
            map("https://rs.example.com/.well-known/oauth-authorization-server/tenant"),
            "https://rs.example.com/tenant"
        );
        assert_eq!(
            map("https://rs.example.com/.well-known/custom"),
            "https://rs.example.com"
        );
    }

    #[test]
    fn query_is_kept_and_fragment_dropped() {
        assert_eq!(
            map("https://rs.example.com/.well-known/oauth-protected-resource/api?v=1#frag"),
            "https://rs.example.com/api?v=1"
        );
        assert_eq!(
            map("https://rs.example.com/.well-known/oauth-protected-resource?v=1"),
            "https://rs.example.com/?v=1"
        );
    }

    #[test]
    fn non_special_scheme_keeps_its_host() {
        assert_eq!(
            map("h2c://example.org/.well-known/oauth-protected-resource/api"),
            "h2c://example.org/api"
        );
        assert_eq!(
            map("h2c://example.org:8080/.well-known/oauth-protected-resource"),
            "h2c://example.org:8080"
        );
    }

    #[test]
    fn paths_without_well_known_prefix_are_untouched() {
        assert_eq!(map("https://rs.example.com/api/v1"), "https://rs.example.com/api/v1");
        assert_eq!(map("https://rs.example.com/"), "https://rs.example.com");
        assert_eq!(
            map("https://rs.example.com/.well-known//x"),
            "https://rs.example.com/.well-known//x"
        );
    }

    #[test]
    fn strip_is_prefix_only() {
        assert_eq!(strip_well_known("/api/.well-known/x"), "/api/.well-known/x");
        assert_eq!(strip_well_known("/.well-known/"), "/.well-known/");
        assert_eq!(strip_well_known("/.well-known/x/y/z"), "/y/z");
    }
}
