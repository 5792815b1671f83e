//! Wire types exchanged with the ZapLink backend

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Profile of the signed-in user as returned by `GET /user/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl UserProfile {
    /// Name to greet the user with, falling back to the email address
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Uppercased first letter of the display name, used for avatar placeholders
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |c| c.to_uppercase().to_string())
    }
}

/// A short URL owned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    pub id: String,
    pub original_url: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub last_access: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl ShortUrl {
    /// The tag, if one was set. The backend stores `"None"` for untagged bulk entries.
    pub fn tag(&self) -> Option<&str> {
        self.tag
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty() && *tag != "None")
    }
}

/// Query parameters of `POST /shorten`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the custom alias; blank values are ignored
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = non_blank(alias.into());
        self
    }

    /// Set the tag; blank values are ignored
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = non_blank(tag.into());
        self
    }

    /// Query pairs in the order the backend documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("url", self.url.as_str())];
        if let Some(alias) = &self.alias {
            pairs.push(("alias", alias.as_str()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.as_str()));
        }
        pairs
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Response of `POST /shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_id: String,
    pub short_url: String,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub is_private: bool,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// The backend serializes booleans in string maps, so accept both forms.
fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Text(text) => text.eq_ignore_ascii_case("true"),
    })
}

/// One entry of the `POST /bulk-shorten` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkShortenEntry {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Response of `POST /bulk-shorten`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BulkShortenResponse {
    #[serde(default)]
    pub shortened_urls: BTreeMap<String, String>,
}

/// Per-URL result of a bulk shorten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOutcome {
    pub original_url: String,
    /// The short id, or the backend's error text
    pub result: Result<String, String>,
}

impl BulkShortenResponse {
    /// Split the backend map into successes and failures. Failed entries carry an
    /// `Error: ` prefixed value instead of a short id.
    pub fn outcomes(&self) -> Vec<BulkOutcome> {
        self.shortened_urls
            .iter()
            .map(|(original_url, value)| BulkOutcome {
                original_url: original_url.clone(),
                result: match value.strip_prefix("Error:") {
                    Some(error) => Err(error.trim().to_string()),
                    None => Ok(value.clone()),
                },
            })
            .collect()
    }
}

/// Response of `GET /urls?tag=`: either the links or an informational message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlListResponse {
    Links(Vec<ShortUrl>),
    Message { message: String },
}

impl UrlListResponse {
    pub fn into_parts(self) -> (Vec<ShortUrl>, Option<String>) {
        match self {
            Self::Links(links) => (links, None),
            Self::Message { message } => (Vec::new(), Some(message)),
        }
    }
}

/// Response of `DELETE /{id}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Aggregation window for `GET /{shortId}/analytics`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsRange {
    #[default]
    Day,
    Week,
    Month,
}

impl AnalyticsRange {
    pub const ALL: [Self; 3] = [Self::Day, Self::Week, Self::Month];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_str() == value)
    }
}

/// Response of `GET /{shortId}/analytics`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub date: String,
    /// Keyed by hour of day, `"0"` to `"23"`
    #[serde(default)]
    pub clicks_per_hour: BTreeMap<String, u64>,
    #[serde(default)]
    pub device_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub browser_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub country_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub total_clicks: u64,
}

/// Response of `GET /{shortId}/summary`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UrlSummary {
    #[serde(default)]
    pub summary: Option<String>,
    /// Comma separated
    #[serde(default)]
    pub keywords: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_deserializes_camel_case() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": "google#123",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "pictureUrl": "https://example.com/ada.png",
            "provider": "google",
            "providerId": "123",
            "role": "USER",
            "lastLogin": "2026-10-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(profile.picture_url.as_deref(), Some("https://example.com/ada.png"));
        assert_eq!(profile.last_login.as_deref(), Some("2026-10-01T12:00:00Z"));
        assert_eq!(profile.display_name(), "Ada Lovelace");
        assert_eq!(profile.initial(), "A");
    }

    #[test]
    fn test_profile_display_name_falls_back_to_email() {
        let profile: UserProfile =
            serde_json::from_value(json!({ "email": "bob@example.com" })).unwrap();
        assert_eq!(profile.display_name(), "bob@example.com");
        assert_eq!(profile.initial(), "B");
    }

    #[test]
    fn test_short_url_tag_filters_placeholders() {
        let mut url: ShortUrl = serde_json::from_value(json!({
            "id": "abc123",
            "originalUrl": "https://example.com",
            "tag": "None",
            "clickCount": 4,
            "lastAccess": "2026-10-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(url.tag(), None);

        url.tag = Some(" work ".into());
        assert_eq!(url.tag(), Some("work"));
    }

    #[test]
    fn test_shorten_request_omits_blank_fields() {
        let request = ShortenRequest::new("https://example.com").alias("  ").tag("social");
        assert_eq!(
            request.query_pairs(),
            vec![("url", "https://example.com"), ("tag", "social")]
        );
    }

    #[test]
    fn test_shorten_response_accepts_string_flag() {
        let response: ShortenResponse = serde_json::from_value(json!({
            "shortId": "abc123",
            "shortUrl": "localhost:8080/api/abc123",
            "isPrivate": "false",
            "ownerId": "google#1"
        }))
        .unwrap();
        assert!(!response.is_private);
        assert_eq!(response.owner_id.as_deref(), Some("google#1"));
    }

    #[test]
    fn test_bulk_outcomes_split_errors() {
        let response: BulkShortenResponse = serde_json::from_value(json!({
            "shortened_urls": {
                "https://a.example": "aaa111",
                "not a url": "Error: Invalid URL"
            }
        }))
        .unwrap();

        let outcomes = response.outcomes();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].result, Ok("aaa111".to_string()));
        assert_eq!(outcomes[1].result, Err("Invalid URL".to_string()));
    }

    #[test]
    fn test_url_list_response_variants() {
        let links: UrlListResponse = serde_json::from_value(json!([
            { "id": "a", "originalUrl": "https://a.example" }
        ]))
        .unwrap();
        assert_eq!(links.into_parts().0.len(), 1);

        let message: UrlListResponse =
            serde_json::from_value(json!({ "message": "No URLs found for this tag" })).unwrap();
        assert_eq!(
            message.into_parts(),
            (Vec::new(), Some("No URLs found for this tag".to_string()))
        );
    }

    #[test]
    fn test_analytics_range_parse() {
        assert_eq!(AnalyticsRange::parse("week"), Some(AnalyticsRange::Week));
        assert_eq!(AnalyticsRange::parse("year"), None);
    }
}
