//! Social share links for a short URL

use url::form_urlencoded;

/// Text used when the link has no summary keywords yet
pub const DEFAULT_SHARE_TITLE: &str = "Check out this link";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    LinkedIn,
    Reddit,
    X,
    WhatsApp,
}

impl SharePlatform {
    pub const ALL: [Self; 4] = [Self::LinkedIn, Self::Reddit, Self::X, Self::WhatsApp];

    pub const fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Reddit => "Reddit",
            Self::X => "X",
            Self::WhatsApp => "WhatsApp",
        }
    }

    /// Intent URL that opens the platform's share dialog for `short_url`.
    ///
    /// `title` falls back to [`DEFAULT_SHARE_TITLE`] when blank.
    pub fn share_url(self, short_url: &str, title: Option<&str>) -> String {
        let title = title
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_SHARE_TITLE);

        let (base, params): (&str, Vec<(&str, String)>) = match self {
            Self::LinkedIn => (
                "https://www.linkedin.com/feed/",
                vec![
                    ("linkOrigin", "LI_BADGE".to_string()),
                    ("shareActive", "true".to_string()),
                    ("shareUrl", short_url.to_string()),
                    ("text", title.to_string()),
                ],
            ),
            Self::Reddit => (
                "https://www.reddit.com/submit",
                vec![
                    ("url", short_url.to_string()),
                    ("title", title.to_string()),
                    ("type", "LINK".to_string()),
                ],
            ),
            Self::X => (
                "https://x.com/intent/post",
                vec![("url", short_url.to_string()), ("text", title.to_string())],
            ),
            Self::WhatsApp => ("https://wa.me/", vec![("text", format!("{title}: {short_url}"))]),
        };

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        format!("{base}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_share_urls_encode_parameters() {
        assert_eq!(
            SharePlatform::Reddit.share_url("https://zap.link/abc", Some("rust, wasm")),
            "https://www.reddit.com/submit?url=https%3A%2F%2Fzap.link%2Fabc&title=rust%2C+wasm&type=LINK"
        );
        assert_eq!(
            SharePlatform::X.share_url("https://zap.link/abc", None),
            "https://x.com/intent/post?url=https%3A%2F%2Fzap.link%2Fabc&text=Check+out+this+link"
        );
    }

    #[test]
    fn test_whatsapp_puts_link_in_text() {
        let url = SharePlatform::WhatsApp.share_url("https://zap.link/abc", Some("  "));
        let parsed = Url::parse(&url).unwrap();
        let text = parsed
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned());
        assert_eq!(
            text.as_deref(),
            Some("Check out this link: https://zap.link/abc")
        );
    }
}
