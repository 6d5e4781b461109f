//! Browser-like request headers.
//!
//! The portal serves a stripped page (or nothing) to clients that do not
//! look like a browser, so every request carries this header set.

/// Header names and values sent with every portal request.
///
/// `Accept-Encoding` is left to reqwest, which only advertises the encodings
/// it can decode.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("accept-language", "en-US,en;q=0.5"),
    ("connection", "keep-alive"),
    ("upgrade-insecure-requests", "1"),
];

/// Builds a `HeaderMap` from [`BROWSER_HEADERS`].
///
/// All names and values are static ASCII, so conversion cannot fail; any entry
/// that somehow does is skipped rather than aborting client construction.
pub fn browser_header_map() -> reqwest::header::HeaderMap {
    let mut map = reqwest::header::HeaderMap::new();
    for (name, value) in BROWSER_HEADERS {
        let (Ok(name), Ok(value)) = (
            reqwest::header::HeaderName::from_bytes(name.as_bytes()),
            reqwest::header::HeaderValue::from_str(value),
        ) else {
            log::warn!("Skipping malformed default header {name}");
            continue;
        };
        map.insert(name, value);
    }
    map
}
