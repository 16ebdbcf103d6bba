use url::Url;

const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https"];

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Returns the URL only when it parses as an absolute http(s) URL, so it is
/// safe to place in `href` or `src`.
pub fn safe_external_url(raw_url: &str) -> Option<String> {
    let parsed = Url::parse(raw_url.trim()).ok()?;
    if !ALLOWED_URL_SCHEMES.contains(&parsed.scheme()) {
        log::debug!("[RESULTS] Refusing URL with scheme {}", parsed.scheme());
        return None;
    }
    Some(parsed.to_string())
}
