//! Token patterns recognized by the change detectors

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Digit runs with an optional decimal part
    static ref NUMBER_PATTERN: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();

    /// Dotted version-like tokens (1.2, 1.2.3, ...)
    static ref VERSION_PATTERN: Regex = Regex::new(r"\b\d+(?:\.\d+)+\b").unwrap();

    /// ISO dates, DD/MM/YY(YY) and DD-MM-YY(YY) dates, DD.MM.YYYY and "5 Mar 2024".
    /// Dotted dates need a four-digit year so versions like 1.2.10 stay out.
    static ref DATE_PATTERN: Regex = Regex::new(
        r"(?i)\b(?:\d{4}-\d{1,2}-\d{1,2}|\d{1,2}/\d{1,2}/\d{2,4}|\d{1,2}-\d{1,2}-\d{2,4}|\d{1,2}\.\d{1,2}\.\d{4}|\d{1,2}\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?\s+\d{4})\b"
    )
    .unwrap();

    static ref URL_PATTERN: Regex =
        Regex::new(r#"[A-Za-z][A-Za-z0-9+.-]*://[^\s<>"']+"#).unwrap();

    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
}

/// Sentence punctuation that commonly trails a URL without being part of it
const URL_TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

/// Numbers in positional order, duplicates kept
pub fn numbers(line: &str) -> Vec<&str> {
    NUMBER_PATTERN.find_iter(line).map(|m| m.as_str()).collect()
}

pub fn versions(line: &str) -> Vec<&str> {
    VERSION_PATTERN.find_iter(line).map(|m| m.as_str()).collect()
}

pub fn dates(line: &str) -> Vec<&str> {
    DATE_PATTERN.find_iter(line).map(|m| m.as_str()).collect()
}

pub fn urls(line: &str) -> Vec<&str> {
    URL_PATTERN
        .find_iter(line)
        .map(|m| m.as_str().trim_end_matches(URL_TRAILING))
        .collect()
}

pub fn emails(line: &str) -> Vec<&str> {
    EMAIL_PATTERN.find_iter(line).map(|m| m.as_str()).collect()
}
