//! Feed-specific utility functions for the collector

/// URL utilities for feeds and article links
pub mod url {
    use ::url::Url;

    /// Query parameters that only carry campaign tracking.
    const TRACKING_PARAMS: &[&str] = &[
        "utm_source",
        "utm_medium",
        "utm_campaign",
        "utm_term",
        "utm_content",
        "ref",
        "source",
        "fbclid",
        "gclid",
        "mc_cid",
        "mc_eid",
    ];

    /// Validate feed URL format
    pub fn is_valid_feed_url(url_str: &str) -> bool {
        if let Ok(url) = Url::parse(url_str) {
            url.scheme() == "http" || url.scheme() == "https"
        } else {
            false
        }
    }

    /// Canonical form of an article link, used to spot the same story
    /// syndicated under slightly different URLs.
    pub fn normalize_url(url_str: &str) -> String {
        let trimmed = url_str.trim();
        let Ok(mut url) = Url::parse(trimmed) else {
            return trimmed.to_string();
        };

        // Scheme and host are already lowercased by the parser.
        if let Some(host) = url.host_str().and_then(|h| h.strip_prefix("www.")).map(str::to_owned) {
            if url.set_host(Some(&host)).is_err() {
                return trimmed.to_string();
            }
        }

        let path = url.path().trim_end_matches('/').to_string();
        if !path.is_empty() {
            url.set_path(&path);
        }

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.to_lowercase().as_str()))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }

        url.set_fragment(None);
        url.to_string()
    }

}

/// Text helpers
pub mod text {
    /// Cut `text` to at most `max_chars` characters, on a char boundary.
    pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((index, _)) => &text[..index],
            None => text,
        }
    }

    /// Shorten a string for log output.
    pub fn preview(text: &str, max_chars: usize) -> String {
        let cut = truncate_chars(text, max_chars);
        if cut.len() < text.len() {
            format!("{}...", cut)
        } else {
            cut.to_string()
        }
    }

    /// Lowercased, whitespace-collapsed form used to compare titles.
    /// Single-line form of `text`: every whitespace run becomes one space.
    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn title_key(title: &str) -> String {
        collapse_whitespace(title).to_lowercase()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn truncation_respects_char_boundaries() {
            assert_eq!(truncate_chars("héllo", 2), "hé");
            assert_eq!(truncate_chars("abc", 10), "abc");
            assert_eq!(preview("abcdef", 3), "abc...");
        }

        #[test]
        fn title_key_collapses_case_and_spacing() {
            assert_eq!(title_key("  OpenAI   ships\tGPT "), "openai ships gpt");
        }
    }
}
