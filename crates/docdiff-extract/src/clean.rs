//! Text cleanup shared by every adapter

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A dash bullet running on from the previous text
    static ref INLINE_BULLET: Regex = Regex::new(r"(\S)\s+-\s+").unwrap();

    /// A numbered list item ("3. " or "3) ") running on from the previous text
    static ref INLINE_NUMBERED_ITEM: Regex = Regex::new(r"([^\s\d])\s+(\d+[.)]\s)").unwrap();

    /// A capitalized heading glued to the end of a lowercase word
    static ref RUN_ON_HEADING: Regex = Regex::new(r"([a-z])([A-Z][a-zA-Z\s:]{5,})").unwrap();

    /// A sentence end followed by a capitalized word
    static ref SENTENCE_BREAK: Regex = Regex::new(r"([.!?])[ \t]+([A-Z])").unwrap();

    /// Print header stamp such as "[05.01.2024 10:15:00]"
    static ref PRINT_STAMP: Regex =
        Regex::new(r"\[\d{2}\.\d{2}\.\d{4}\s+\d{2}:\d{2}:\d{2}\](.*)$").unwrap();
}

/// Normalize extracted text
///
/// Unifies line endings, drops control characters other than tab and
/// newline, collapses runs of spaces and tabs, trims every line and then the
/// whole text.
pub fn clean_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<String> = unified
        .split('\n')
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_control() || *c == '\t')
                .collect::<String>()
                .split([' ', '\t'])
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    lines.join("\n").trim().to_string()
}

/// Recover line structure from PDF text that comes out as run-on paragraphs
///
/// Bullets, numbered items, headings glued to the preceding word and
/// sentences starting with a capital letter each go on their own line. Browser print artifacts (`file:///` footers and
/// timestamp headers) are dropped, keeping any text after a timestamp.
pub fn restructure_pdf_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let split = INLINE_BULLET.replace_all(&unified, "$1\n- ");
    let split = INLINE_NUMBERED_ITEM.replace_all(&split, "$1\n$2");
    let split = RUN_ON_HEADING.replace_all(&split, "$1\n$2");
    let split = SENTENCE_BREAK.replace_all(&split, "$1\n$2");

    split
        .split('\n')
        .filter_map(|line| {
            let line = line.trim();
            if line.starts_with("file:///") {
                return None;
            }
            if let Some(caps) = PRINT_STAMP.captures(line) {
                let rest = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
                return (!rest.is_empty()).then(|| rest.to_string());
            }
            (!line.is_empty()).then(|| line.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
