//! Endpoint URL construction from the `host` and `realm` fragments.

const HTTPS_SCHEME: &str = "https://";
const HTTP_SCHEME: &str = "http://";

/// Joins scheme, host and realm into the upload URL.
///
/// Leading and trailing `/` are stripped from both fragments so the result
/// has exactly one separator between host and realm. A fragment is never
/// stripped below one character, so `"/"` stays `"/"`. The resulting URL is
/// not validated; a malformed host fails when the request is sent.
pub fn endpoint_url(use_https: bool, host: &str, realm: &str) -> String {
    let host = trim_trailing_slashes(trim_leading_slashes(host));
    let realm = trim_trailing_slashes(trim_leading_slashes(realm));

    let scheme = if use_https { HTTPS_SCHEME } else { HTTP_SCHEME };

    format!("{}{}/{}", scheme, host, realm)
}

fn trim_leading_slashes(mut value: &str) -> &str {
    while value.len() > 1 && value.starts_with('/') {
        value = &value[1..];
    }
    value
}

// Bounded by the fragment's own length.
fn trim_trailing_slashes(mut value: &str) -> &str {
    while value.len() > 1 && value.ends_with('/') {
        value = &value[..value.len() - 1];
    }
    value
}
