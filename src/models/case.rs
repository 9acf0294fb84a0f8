//! Cases and filename matching
//!
//! A case is one set of paired images across the three variant folders. The
//! folders do not share names or extensions reliably, so pairing goes through
//! the numeric identifier embedded in each filename.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Extensions accepted when scanning the reference folder
pub const CATALOG_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff"];

/// Extensions considered when matching a variant file by identifier
pub const MATCH_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"));

/// One evaluation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub id: u64,
    pub file_name: String,
}

impl Case {
    pub fn new(file_name: &str) -> Self {
        Self {
            id: extract_case_id(file_name),
            file_name: file_name.to_string(),
        }
    }
}

/// First run of ASCII digits in `file_name`, or 0 when there is none.
///
/// Runs too long for a `u64` saturate instead of failing.
pub fn extract_case_id(file_name: &str) -> u64 {
    match DIGIT_RUN.find(file_name) {
        Some(m) => m.as_str().parse().unwrap_or(u64::MAX),
        None => 0,
    }
}

/// Case-insensitive extension check against an allow-list
pub fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| allowed.iter().any(|a| a.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_first_digit_run() {
        assert_eq!(extract_case_id("case_12b_7.png"), 12);
        assert_eq!(extract_case_id("IMG0042.jpg"), 42);
        assert_eq!(extract_case_id("7.png"), 7);
    }

    #[test]
    fn test_extract_without_digits_is_zero() {
        assert_eq!(extract_case_id("tooth.png"), 0);
        assert_eq!(extract_case_id("molar.jpeg"), 0);
        assert_eq!(extract_case_id("tooth.png"), extract_case_id("molar.jpeg"));
    }

    #[test]
    fn test_extract_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not treated as an identifier
        assert_eq!(extract_case_id("case_\u{0663}.png"), 0);
    }

    #[test]
    fn test_extract_saturates_on_overflow() {
        assert_eq!(extract_case_id("case_99999999999999999999999.png"), u64::MAX);
    }

    #[test]
    fn test_has_extension_case_insensitive() {
        assert!(has_extension(Path::new("a/1.PNG"), CATALOG_EXTENSIONS));
        assert!(has_extension(Path::new("1.TiFf"), CATALOG_EXTENSIONS));
        assert!(!has_extension(Path::new("1.tiff"), MATCH_EXTENSIONS));
        assert!(!has_extension(Path::new("notes.txt"), CATALOG_EXTENSIONS));
        assert!(!has_extension(Path::new("png"), CATALOG_EXTENSIONS));
    }

    #[test]
    fn test_case_new() {
        let case = Case::new("case_3.png");
        assert_eq!(case.id, 3);
        assert_eq!(case.file_name, "case_3.png");
    }
}
