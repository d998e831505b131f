//! Experience Extractor — parses years-of-experience requirements out of free
//! text via an ordered list of (matcher, interpretation) pairs, with a
//! title-keyword fallback when the description yields nothing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registry::TITLE_EXPERIENCE_HINTS;

/// Captured integers outside this range are discarded.
const MAX_REASONABLE_YEARS: u8 = 30;

/// How a pattern's captures map to (min, max) bounds.
#[derive(Debug, Clone, Copy)]
enum Interpretation {
    /// One capture: min = N, max unset.
    MinOnly,
    /// Two captures: min = N, max = M; requires N <= M.
    Range,
    /// One capture: min = max = N.
    Exact,
}

/// Ordered pattern table. The first pattern with a valid match wins; later
/// patterns are never consulted. Order encodes precedence: explicit bounds
/// ("8+", "5-7", "minimum 6") before the generic "N years experience" rule.
static EXPERIENCE_PATTERNS: Lazy<Vec<(Regex, Interpretation)>> = Lazy::new(|| {
    [
        // "8+ years" / "8+ yrs"
        (r"(\d+)\+\s*(?:years?|yrs?)", Interpretation::MinOnly),
        // "5-7 years" / "5 to 7 years"
        (
            r"(\d+)\s*(?:[-\u{2013}\u{2014}]+|to)\s*(\d+)\s*(?:years?|yrs?)",
            Interpretation::Range,
        ),
        // "minimum 6 years" / "min 6 yrs" / "at least 6 years"
        (
            r"(?:minimum|min\.?|at\s+least)\s*(\d+)\s*(?:years?|yrs?)",
            Interpretation::MinOnly,
        ),
        // "6 years minimum" / "6+ years required" / "6 years or more"
        (
            r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:minimum|min\.?|required|or\s+more)",
            Interpretation::MinOnly,
        ),
        // "over 5 years" / "more than 5 years"
        (
            r"(?:over|more\s+than)\s*(\d+)\s*(?:years?|yrs?)",
            Interpretation::MinOnly,
        ),
        // "5 years of professional experience" and friends
        (
            r"(\d+)\+?\s*(?:years?|yrs?)\s+(?:of\s+)?(?:professional|industry|relevant|hands-on)\s+experience",
            Interpretation::MinOnly,
        ),
        // Generic "5 years experience" — lowest priority, treated as exact
        (
            r"(\d+)\s*(?:years?|yrs?)\s*(?:of\s+)?experience",
            Interpretation::Exact,
        ),
    ]
    .into_iter()
    .map(|(pattern, interp)| {
        (
            Regex::new(pattern).expect("invalid experience pattern"),
            interp,
        )
    })
    .collect()
});

/// Extracts (min_years, max_years) from free text, first valid match wins.
pub fn extract_from_text(text: &str) -> (Option<u8>, Option<u8>) {
    if text.is_empty() {
        return (None, None);
    }
    let text = text.to_lowercase();

    for (pattern, interpretation) in EXPERIENCE_PATTERNS.iter() {
        for caps in pattern.captures_iter(&text) {
            match interpretation {
                Interpretation::Range => {
                    let (Some(min), Some(max)) = (capture_years(&caps, 1), capture_years(&caps, 2))
                    else {
                        continue;
                    };
                    if min <= max {
                        return (Some(min), Some(max));
                    }
                }
                Interpretation::MinOnly => {
                    if let Some(min) = capture_years(&caps, 1) {
                        return (Some(min), None);
                    }
                }
                Interpretation::Exact => {
                    if let Some(years) = capture_years(&caps, 1) {
                        return (Some(years), Some(years));
                    }
                }
            }
        }
    }

    (None, None)
}

fn capture_years(caps: &regex::Captures<'_>, group: usize) -> Option<u8> {
    let years: u32 = caps.get(group)?.as_str().parse().ok()?;
    if years <= MAX_REASONABLE_YEARS as u32 {
        Some(years as u8)
    } else {
        None
    }
}

/// Infers bounds from the job title when the description has no explicit
/// requirement. First matching keyword in table order wins.
pub fn extract_from_title(title: &str) -> (Option<u8>, Option<u8>) {
    let title = title.to_lowercase();
    for (keyword, (min, max)) in TITLE_EXPERIENCE_HINTS {
        if title.contains(keyword) {
            return (Some(*min), Some(*max));
        }
    }
    (None, None)
}

/// Full extraction: description first (most accurate), title as fallback.
pub fn extract(title: &str, description: Option<&str>) -> (Option<u8>, Option<u8>) {
    if let Some(description) = description {
        let (min, max) = extract_from_text(description);
        if min.is_some() {
            return (min, max);
        }
    }
    extract_from_title(title)
}

/// Whether a candidate's experience satisfies a job's extracted bounds.
/// `buffer` years of flexibility are allowed on both ends.
pub fn is_experience_match(
    user_years: u8,
    required_min: Option<u8>,
    required_max: Option<u8>,
    buffer: u8,
) -> bool {
    let Some(required_min) = required_min else {
        return true;
    };

    if user_years < required_min.saturating_sub(buffer) {
        return false;
    }

    if let Some(required_max) = required_max {
        if user_years > required_max.saturating_add(buffer) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_pattern_sets_min_only() {
        assert_eq!(extract_from_text("8+ years of experience"), (Some(8), None));
        assert_eq!(extract_from_text("3+ yrs in backend"), (Some(3), None));
    }

    #[test]
    fn test_range_pattern() {
        assert_eq!(
            extract_from_text("5-7 years of experience"),
            (Some(5), Some(7))
        );
        assert_eq!(
            extract_from_text("We want 2 to 4 years experience"),
            (Some(2), Some(4))
        );
    }

    #[test]
    fn test_minimum_pattern() {
        assert_eq!(extract_from_text("minimum 6 years"), (Some(6), None));
        assert_eq!(extract_from_text("at least 4 yrs"), (Some(4), None));
    }

    #[test]
    fn test_trailing_minimum_pattern() {
        assert_eq!(extract_from_text("6 years minimum"), (Some(6), None));
        assert_eq!(extract_from_text("7 years required"), (Some(7), None));
    }

    #[test]
    fn test_over_pattern() {
        assert_eq!(extract_from_text("over 5 years"), (Some(5), None));
        assert_eq!(extract_from_text("more than 10 years"), (Some(10), None));
    }

    #[test]
    fn test_professional_experience_pattern() {
        assert_eq!(
            extract_from_text("4 years of professional experience shipping web apps"),
            (Some(4), None)
        );
    }

    #[test]
    fn test_generic_pattern_is_exact() {
        assert_eq!(extract_from_text("5 years experience"), (Some(5), Some(5)));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        // 50 is outside [0, 30] so the generic rule discards it
        assert_eq!(extract_from_text("50 years experience"), (None, None));
        // invalid range (min > max via out-of-range max) falls through too
        assert_eq!(extract_from_text("35-40 years"), (None, None));
    }

    #[test]
    fn test_no_digits_yields_nothing() {
        assert_eq!(extract_from_text("seasoned engineer wanted"), (None, None));
    }

    #[test]
    fn test_title_fallback() {
        assert_eq!(
            extract("Senior Software Engineer", Some("great job, apply now")),
            (Some(5), Some(10))
        );
        assert_eq!(extract("Staff Engineer", None), (Some(8), Some(15)));
        assert_eq!(extract("Software Engineer", None), (None, None));
    }

    #[test]
    fn test_description_beats_title() {
        assert_eq!(
            extract("Senior Software Engineer", Some("requires 3+ years")),
            (Some(3), None)
        );
    }

    #[test]
    fn test_out_of_range_description_falls_back_to_title() {
        assert_eq!(
            extract("Senior Software Engineer", Some("50 years experience")),
            (Some(5), Some(10))
        );
    }

    #[test]
    fn test_experience_match_buffer() {
        assert!(!is_experience_match(3, Some(5), None, 1)); // 3 < 5 - 1
        assert!(is_experience_match(4, Some(5), None, 1));
        assert!(is_experience_match(7, Some(5), None, 1));
    }

    #[test]
    fn test_experience_match_upper_bound() {
        assert!(is_experience_match(6, Some(2), Some(5), 1));
        assert!(!is_experience_match(7, Some(2), Some(5), 1));
    }

    #[test]
    fn test_no_requirement_always_matches() {
        assert!(is_experience_match(0, None, None, 1));
        assert!(is_experience_match(0, None, Some(2), 1));
    }
}
