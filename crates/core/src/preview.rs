//! Hover preview: summary text processing, keyword colours, throttling and placement

use crate::time::Clock;
use crate::types::UrlSummary;
use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Longest summary shown before truncation
pub const SUMMARY_MAX_CHARS: usize = 300;

pub const DEFAULT_THROTTLE_MS: i64 = 2_000;

/// Rendered width of the preview card in CSS pixels
pub const PREVIEW_WIDTH_PX: i32 = 350;

/// Gap between the cursor and the card
pub const CURSOR_MARGIN_PX: i32 = 20;

/// Soft backgrounds for keyword tags
pub const KEYWORD_PALETTE: [&str; 12] = [
    "#E0F2FE", "#FEE2E2", "#D1FAE5", "#FEF3C7", "#E5E7EB", "#FCE7F3", "#DBEAFE", "#ECFCCB",
    "#F3E8FF", "#FFEDD5", "#E0E7FF", "#F5F5F4",
];

/// Cut `summary` to [`SUMMARY_MAX_CHARS`], ending with `...` when shortened
pub fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() <= SUMMARY_MAX_CHARS {
        return summary.to_string();
    }
    let mut truncated: String = summary.chars().take(SUMMARY_MAX_CHARS - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Non-blank lines of the summary
pub fn paragraphs(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_keywords(keywords: &str) -> Vec<String> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stable background colour for a keyword.
///
/// Sums each UTF-16 code unit weighted by its 1-based position.
pub fn keyword_color(keyword: &str) -> &'static str {
    let hash = keyword
        .encode_utf16()
        .enumerate()
        .fold(0u64, |acc, (i, unit)| {
            acc.wrapping_add(u64::from(unit).wrapping_mul(i as u64 + 1))
        });

    #[allow(clippy::cast_possible_truncation)]
    let index = (hash % KEYWORD_PALETTE.len() as u64) as usize;
    KEYWORD_PALETTE[index]
}

/// Processed summary ready for display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewContent {
    pub paragraphs: Vec<String>,
    pub keywords: Vec<(String, &'static str)>,
}

impl PreviewContent {
    pub fn has_summary(&self) -> bool {
        !self.paragraphs.is_empty()
    }
}

impl From<&UrlSummary> for PreviewContent {
    fn from(summary: &UrlSummary) -> Self {
        let paragraphs = summary
            .summary
            .as_deref()
            .map(truncate_summary)
            .map(|text| paragraphs(&text))
            .unwrap_or_default();

        let keywords = summary
            .keywords
            .as_deref()
            .map(parse_keywords)
            .unwrap_or_default()
            .into_iter()
            .map(|keyword| {
                let color = keyword_color(&keyword);
                (keyword, color)
            })
            .collect();

        Self {
            paragraphs,
            keywords,
        }
    }
}

/// Lets an action through at most once per interval
pub struct Throttle {
    clock: Rc<dyn Clock>,
    interval: Duration,
    last: Cell<Option<DateTime<Utc>>>,
}

impl Throttle {
    pub fn new(clock: Rc<dyn Clock>, interval: Duration) -> Self {
        Self {
            clock,
            interval,
            last: Cell::new(None),
        }
    }

    /// Whether the action may run now; records the attempt when it may
    pub fn ready(&self) -> bool {
        let now = self.clock.now();
        match self.last.get() {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last.set(Some(now));
                true
            }
        }
    }
}

/// Fixed position of the preview card relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `left` offset, card to the right of the cursor
    Right { left: i32, top: i32 },
    /// `right` offset, card to the left of the cursor
    Left { right: i32, top: i32 },
}

impl Placement {
    /// Place the card next to a cursor at (`x`, `y`) in a viewport `viewport_width` wide
    pub const fn near_cursor(x: i32, y: i32, viewport_width: i32) -> Self {
        let top = y - CURSOR_MARGIN_PX;
        if x + PREVIEW_WIDTH_PX + CURSOR_MARGIN_PX > viewport_width {
            Self::Left {
                right: viewport_width - x + 10,
                top,
            }
        } else {
            Self::Right {
                left: x + CURSOR_MARGIN_PX,
                top,
            }
        }
    }

    /// Inline CSS for the card
    pub fn to_style(self) -> String {
        match self {
            Self::Right { left, top } => {
                format!("position: fixed; z-index: 1000; left: {left}px; top: {top}px;")
            }
            Self::Left { right, top } => {
                format!("position: fixed; z-index: 1000; right: {right}px; top: {top}px;")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    #[test]
    fn test_truncate_summary() {
        let short = "A short summary.";
        assert_eq!(truncate_summary(short), short);

        let exact = "x".repeat(300);
        assert_eq!(truncate_summary(&exact), exact);

        let long = "y".repeat(301);
        let truncated = truncate_summary(&long);
        assert_eq!(truncated.chars().count(), 300);
        assert!(truncated.ends_with("yyy..."));
    }

    #[test]
    fn test_paragraphs_and_keywords() {
        assert_eq!(
            paragraphs("First.\n\n  \nSecond."),
            vec!["First.".to_string(), "Second.".to_string()]
        );
        assert_eq!(
            parse_keywords(" rust, wasm ,,yew "),
            vec!["rust".to_string(), "wasm".to_string(), "yew".to_string()]
        );
    }

    #[test]
    fn test_keyword_color_is_positional_hash() {
        // 'a' * 1 + 'b' * 2 = 97 + 196 = 293, 293 % 12 = 5
        assert_eq!(keyword_color("ab"), KEYWORD_PALETTE[5]);
        // 'b' * 1 + 'a' * 2 = 98 + 194 = 292, 292 % 12 = 4
        assert_eq!(keyword_color("ba"), KEYWORD_PALETTE[4]);
        assert_eq!(keyword_color(""), KEYWORD_PALETTE[0]);
        assert_eq!(keyword_color("rust"), keyword_color("rust"));
    }

    #[test]
    fn test_preview_content_from_summary() {
        let content = PreviewContent::from(&UrlSummary {
            summary: Some("Line one\nLine two".into()),
            keywords: Some("ab, ba".into()),
        });
        assert_eq!(content.paragraphs.len(), 2);
        assert_eq!(
            content.keywords,
            vec![
                ("ab".to_string(), KEYWORD_PALETTE[5]),
                ("ba".to_string(), KEYWORD_PALETTE[4])
            ]
        );

        assert!(!PreviewContent::from(&UrlSummary::default()).has_summary());
    }

    #[test]
    fn test_throttle_blocks_within_interval() {
        let clock = Rc::new(ManualClock::default());
        let throttle = Throttle::new(clock.clone(), Duration::milliseconds(DEFAULT_THROTTLE_MS));

        assert!(throttle.ready());
        clock.advance(Duration::milliseconds(1_999));
        assert!(!throttle.ready());
        clock.advance(Duration::milliseconds(1));
        assert!(throttle.ready());
    }

    #[test]
    fn test_placement_flips_near_right_edge() {
        assert_eq!(
            Placement::near_cursor(100, 200, 1024),
            Placement::Right { left: 120, top: 180 }
        );
        assert_eq!(
            Placement::near_cursor(900, 200, 1024),
            Placement::Left { right: 134, top: 180 }
        );
        assert_eq!(
            Placement::near_cursor(100, 50, 1024).to_style(),
            "position: fixed; z-index: 1000; left: 120px; top: 30px;"
        );
    }
}
