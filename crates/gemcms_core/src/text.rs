//! Shared URL and text normalization helpers.

/// Prefix `https://` when a URL carries no scheme.
///
/// Empty input stays empty so a blank form field never turns into a
/// dangling `https://` link.
///
/// # Returns
/// The URL with a scheme guaranteed, or an empty string.
pub fn ensure_protocol(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Normalize an optional redirect link before persisting.
///
/// # Returns
/// `None` when the input is missing or whitespace-only; otherwise the
/// trimmed value with a scheme guaranteed.
pub fn normalize_redirect(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(ensure_protocol(trimmed))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{ensure_protocol, normalize_redirect};

    #[test]
    fn ensure_protocol_prefixes_bare_hosts() {
        assert_eq!(ensure_protocol("google.com"), "https://google.com");
        assert_eq!(ensure_protocol("http://x.com"), "http://x.com");
        assert_eq!(ensure_protocol("HTTPS://x.com"), "HTTPS://x.com");
        assert_eq!(ensure_protocol(""), "");
    }

    #[test]
    fn normalize_redirect_trims_and_drops_blank() {
        assert_eq!(
            normalize_redirect(Some("  loja.com/promo  ".to_string())),
            Some("https://loja.com/promo".to_string())
        );
        assert_eq!(normalize_redirect(Some("   ".to_string())), None);
        assert_eq!(normalize_redirect(None), None);
    }
}
