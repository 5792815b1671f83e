//! Helpers for displaying and creating short links

use crate::error::{CoreError, CoreResult};
use crate::types::{BulkShortenEntry, ShortenRequest};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Public form of a short link
pub fn short_link(base: &str, id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}

/// Render a last-access timestamp in the browser's local time zone
pub fn format_last_access(value: &str) -> String {
    format_timestamp_in(value, &Local)
}

/// Render `value` in `tz` when it parses as a timestamp, otherwise return it unchanged
pub fn format_timestamp_in<Tz>(value: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return instant
            .with_timezone(tz)
            .format(DISPLAY_FORMAT)
            .to_string();
    }
    // Server-local timestamps without an offset are shown as they are
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY_FORMAT).to_string();
    }
    value.to_string()
}

/// Validate the single shorten form and build the request
pub fn validate_shorten(url: &str, alias: &str, tag: &str) -> CoreResult<ShortenRequest> {
    let url = url.trim();
    if url.is_empty() {
        return Err(CoreError::invalid_input("Please enter a URL"));
    }
    Ok(ShortenRequest::new(url).alias(alias).tag(tag))
}

/// Parse the bulk textarea: one URL per line, optionally followed by whitespace and a tag
pub fn parse_bulk_input(input: &str) -> CoreResult<Vec<BulkShortenEntry>> {
    let entries: Vec<BulkShortenEntry> = input
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let url = parts.next()?;
            let tag = parts.collect::<Vec<_>>().join(" ");
            Some(BulkShortenEntry {
                url: url.to_string(),
                tag: (!tag.is_empty()).then_some(tag),
            })
        })
        .collect();

    if entries.is_empty() {
        return Err(CoreError::invalid_input("Please enter at least one URL"));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_short_link_trims_base() {
        assert_eq!(
            short_link("http://localhost:8080/api/", "abc123"),
            "http://localhost:8080/api/abc123"
        );
    }

    #[test]
    fn test_timestamp_formatting() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_timestamp_in("2026-10-01T12:00:00Z", &plus_two),
            "2026-10-01 14:00:00"
        );
        assert_eq!(
            format_timestamp_in("2026-10-01T12:00:00.123456", &plus_two),
            "2026-10-01 12:00:00"
        );
        assert_eq!(format_timestamp_in("never", &plus_two), "never");
    }

    #[test]
    fn test_validate_shorten() {
        assert_eq!(
            validate_shorten("   ", "", ""),
            Err(CoreError::invalid_input("Please enter a URL"))
        );

        let request = validate_shorten(" https://example.com ", "mine", "").unwrap();
        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.alias.as_deref(), Some("mine"));
        assert_eq!(request.tag, None);
    }

    #[test]
    fn test_parse_bulk_input() {
        let entries = parse_bulk_input(
            "https://a.example work\n\n   \nhttps://b.example\nhttps://c.example big news\n",
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                BulkShortenEntry {
                    url: "https://a.example".into(),
                    tag: Some("work".into()),
                },
                BulkShortenEntry {
                    url: "https://b.example".into(),
                    tag: None,
                },
                BulkShortenEntry {
                    url: "https://c.example".into(),
                    tag: Some("big news".into()),
                },
            ]
        );

        assert!(parse_bulk_input("\n  \n").is_err());
    }
}
