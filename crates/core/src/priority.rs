//! Priority heuristic for incoming complaints.
//!
//! Computes a 1-10 urgency score from the complaint category and the
//! citizen's free-text description. This is the single canonical
//! implementation; every intake path (server or client) must use it so
//! the score a citizen sees matches the score admins triage by.

/// Lowest possible priority score.
pub const PRIORITY_MIN: i16 = 1;
/// Highest possible priority score.
pub const PRIORITY_MAX: i16 = 10;
/// Base score before any bonuses.
pub const PRIORITY_BASE: i16 = 5;
/// Complaints at or above this score count as high priority in stats.
pub const HIGH_PRIORITY_THRESHOLD: i16 = 7;

/// Urgency keywords scanned for in the description (case-insensitive).
/// A match adds a flat +2 regardless of how many keywords appear.
pub const URGENT_KEYWORDS: &[&str] = &[
    "emergency",
    "urgent",
    "danger",
    "hazard",
    "safety",
    "blocked",
    "overflow",
    "large",
    "deep",
];

/// Internal category names with dedicated scoring rules.
pub mod categories {
    pub const BROKEN_STREET_LIGHT: &str = "broken_street_light";
    pub const GARBAGE_OVERFLOW: &str = "garbage_overflow";
    pub const POTHOLE: &str = "pothole";
}

/// Compute the priority score for a complaint.
///
/// Scoring:
/// - base 5
/// - +2 if the description contains any urgency keyword (flat bonus)
/// - category bonus: `broken_street_light` +1, `garbage_overflow` +2,
///   `pothole` +2 when the description mentions "large" or "deep",
///   otherwise +1; unknown or absent category +0
/// - clamped to 10
///
/// Pure and deterministic; `category_name` is the category's internal
/// name, not its display name.
pub fn priority_score(category_name: Option<&str>, description: &str) -> i16 {
    let desc_lower = description.to_lowercase();
    let mut priority = PRIORITY_BASE;

    if URGENT_KEYWORDS.iter().any(|kw| desc_lower.contains(kw)) {
        priority += 2;
    }

    priority += match category_name {
        Some(categories::BROKEN_STREET_LIGHT) => 1,
        Some(categories::GARBAGE_OVERFLOW) => 2,
        Some(categories::POTHOLE) => {
            if desc_lower.contains("large") || desc_lower.contains("deep") {
                2
            } else {
                1
            }
        }
        _ => 0,
    };

    priority.min(PRIORITY_MAX)
}
