use serde::{Deserialize, Serialize};

/// Image reference used for venue galleries, avatars and banners
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1505691938895-1758d7feb511?w=800";

impl Media {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_IMAGE_URL, "No image available")
    }

    pub fn is_valid(&self) -> bool {
        is_valid_image_url(&self.url)
    }
}

/// Checks that a string is an absolute http(s) URL with a plausible host.
///
/// The API only accepts publicly reachable URLs, so anything relative,
/// `data:` or `file:` is rejected before the request is sent.
pub fn is_valid_image_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return false;
    }

    let rest = if let Some(rest) = url.strip_prefix("https://") {
        rest
    } else if let Some(rest) = url.strip_prefix("http://") {
        rest
    } else {
        return false;
    };

    let authority = rest
        .split(|c| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or("");
    // strip credentials and port
    let host = authority.rsplit('@').next().unwrap_or("");
    let host = host.split(':').next().unwrap_or("");

    if host.is_empty() || host.starts_with('.') || host.ends_with('.') {
        return false;
    }

    host == "localhost" || host.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_image_urls() {
        assert!(is_valid_image_url("https://images.unsplash.com/photo-1?w=800"));
        assert!(is_valid_image_url("http://example.com/a.jpg"));
        assert!(is_valid_image_url("  https://cdn.example.org/img.png  "));
        assert!(is_valid_image_url("http://localhost:8080/img.png"));
    }

    #[test]
    fn test_rejects_non_http_and_malformed() {
        assert!(!is_valid_image_url(""));
        assert!(!is_valid_image_url("/images/a.jpg"));
        assert!(!is_valid_image_url("ftp://example.com/a.jpg"));
        assert!(!is_valid_image_url("data:image/png;base64,AAAA"));
        assert!(!is_valid_image_url("https://"));
        assert!(!is_valid_image_url("https://nodot/a.jpg"));
        assert!(!is_valid_image_url("https://exa mple.com/a.jpg"));
        assert!(!is_valid_image_url("https://.example.com"));
    }

    #[test]
    fn test_placeholder_is_valid() {
        assert!(Media::placeholder().is_valid());
    }
}
