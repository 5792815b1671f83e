//! Chart-ready shaping of per-link analytics

use crate::error::{CoreError, CoreResult};
use crate::types::Analytics;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Base chart colours, used in order
pub const BASE_PALETTE: [&str; 10] = [
    "rgba(54, 162, 235, 0.7)",
    "rgba(75, 192, 192, 0.7)",
    "rgba(255, 99, 132, 0.7)",
    "rgba(255, 206, 86, 0.7)",
    "rgba(153, 102, 255, 0.7)",
    "rgba(255, 159, 64, 0.7)",
    "rgba(199, 199, 199, 0.7)",
    "rgba(83, 102, 255, 0.7)",
    "rgba(255, 99, 255, 0.7)",
    "rgba(139, 69, 19, 0.7)",
];

const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// `count` colours: the base palette first, then opacity variations of it
pub fn chart_colors(count: usize) -> Vec<String> {
    let mut colors: Vec<String> = BASE_PALETTE
        .iter()
        .take(count)
        .map(|color| (*color).to_string())
        .collect();

    #[allow(clippy::cast_precision_loss)]
    for i in 0..count.saturating_sub(BASE_PALETTE.len()) {
        let base = BASE_PALETTE[i % BASE_PALETTE.len()];
        let alpha = 0.3 + i as f64 / count as f64;
        colors.push(base.replace("0.7", &format!("{alpha:.2}")));
    }

    colors
}

/// Clicks in one hour of the selected day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourBucket {
    pub hour: u8,
    pub label: String,
    pub clicks: u64,
}

/// One slice of a device, browser or country breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub count: u64,
    /// Share of the distribution total, 0 to 100
    pub percent: f64,
    pub color: String,
}

/// Always 24 buckets; hours missing from the response count as zero
pub fn hourly_buckets(clicks_per_hour: &BTreeMap<String, u64>) -> Vec<HourBucket> {
    let mut clicks = [0u64; 24];
    for (hour, count) in clicks_per_hour {
        match hour.trim().parse::<usize>() {
            Ok(hour) if hour < clicks.len() => clicks[hour] += count,
            _ => tracing::debug!("Ignoring clicks for unknown hour {hour:?}"),
        }
    }

    (0u8..24)
        .zip(clicks)
        .map(|(hour, clicks)| HourBucket {
            hour,
            label: format!("{hour}:00"),
            clicks,
        })
        .collect()
}

/// Slices ordered by count, largest first, ties by label
pub fn distribution(counts: &BTreeMap<String, u64>) -> Vec<Slice> {
    let total: u64 = counts.values().sum();
    let mut entries: Vec<(&String, &u64)> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let colors = chart_colors(entries.len());
    entries
        .into_iter()
        .zip(colors)
        .map(|((label, count), color)| Slice {
            label: label.clone(),
            count: *count,
            percent: percent(*count, total),
            color,
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Everything the analytics modal renders
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub date: String,
    pub total_clicks: u64,
    pub hourly: Vec<HourBucket>,
    /// Largest hourly count, at least 1 so bar heights can be scaled
    pub peak_hour_clicks: u64,
    pub devices: Vec<Slice>,
    pub browsers: Vec<Slice>,
    pub countries: Vec<Slice>,
}

impl AnalyticsView {
    pub fn is_empty(&self) -> bool {
        self.total_clicks == 0
    }
}

impl From<&Analytics> for AnalyticsView {
    fn from(analytics: &Analytics) -> Self {
        let hourly = hourly_buckets(&analytics.clicks_per_hour);
        let peak_hour_clicks = hourly
            .iter()
            .map(|bucket| bucket.clicks)
            .max()
            .unwrap_or_default()
            .max(1);

        Self {
            date: analytics.date.clone(),
            total_clicks: analytics.total_clicks,
            hourly,
            peak_hour_clicks,
            devices: distribution(&analytics.device_distribution),
            browsers: distribution(&analytics.browser_distribution),
            countries: distribution(&analytics.country_distribution),
        }
    }
}

/// Date as the analytics endpoint expects it
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parse a date picker value, rejecting days after `today`
pub fn parse_picker_date(value: &str, today: NaiveDate) -> CoreResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(value.trim(), API_DATE_FORMAT)
        .map_err(|_| CoreError::invalid_input(format!("Invalid date: {value}")))?;

    if date > today {
        return Err(CoreError::invalid_input(
            "Analytics are not available for future dates",
        ));
    }
    Ok(date)
}

/// Long form, e.g. `Thursday, October 15, 2026`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs
            .iter()
            .map(|(label, count)| ((*label).to_string(), *count))
            .collect()
    }

    #[test]
    fn test_hourly_buckets_fill_missing_hours() {
        let buckets = hourly_buckets(&counts(&[("3", 5), ("23", 1), ("bogus", 9)]));

        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[0].label, "0:00");
        assert_eq!(buckets[3].clicks, 5);
        assert_eq!(buckets[23].label, "23:00");
        assert_eq!(buckets[23].clicks, 1);
        assert_eq!(buckets.iter().map(|b| b.clicks).sum::<u64>(), 6);
    }

    #[test]
    fn test_distribution_sorted_with_percentages() {
        let slices = distribution(&counts(&[("Mobile", 1), ("Desktop", 3), ("Tablet", 1)]));

        let labels: Vec<_> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Desktop", "Mobile", "Tablet"]);
        assert!((slices[0].percent - 60.0).abs() < f64::EPSILON);
        assert_eq!(slices[0].color, BASE_PALETTE[0]);
        assert_eq!(slices[2].color, BASE_PALETTE[2]);
    }

    #[test]
    fn test_chart_colors_extend_past_palette() {
        assert_eq!(chart_colors(3).len(), 3);

        let colors = chart_colors(12);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[10], "rgba(54, 162, 235, 0.30)");
        assert_eq!(colors[11], "rgba(75, 192, 192, 0.38)");
    }

    #[test]
    fn test_view_of_empty_analytics() {
        let view = AnalyticsView::from(&Analytics::default());
        assert!(view.is_empty());
        assert_eq!(view.hourly.len(), 24);
        assert_eq!(view.peak_hour_clicks, 1);
        assert!(view.devices.is_empty());
    }

    #[test]
    fn test_picker_date_rejects_future() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

        assert_eq!(parse_picker_date("2026-10-15", today), Ok(today));
        assert!(parse_picker_date("2026-10-16", today).is_err());
        assert!(parse_picker_date("15/10/2026", today).is_err());
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_api_date(date), "2026-03-05");
        assert_eq!(display_date(date), "Thursday, March 5, 2026");
    }
}
