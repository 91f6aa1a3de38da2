/// Ensures a host string carries an explicit scheme
///
/// If the input does not begin with `http://` or `https://`, `http://` is
/// prefixed. No further validation happens here: anything else about the
/// string (including whether it parses as a URL at all) is the fetcher's
/// problem, where a bad host surfaces as an isolated per-host error.
///
/// # Examples
///
/// ```
/// use link_harvest::url::normalize_host;
///
/// assert_eq!(normalize_host("example.com"), "http://example.com");
/// assert_eq!(normalize_host("https://example.com"), "https://example.com");
/// ```
pub fn normalize_host(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}
