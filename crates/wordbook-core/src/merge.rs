//! Pure merge of a word into a date-sectioned document
//!
//! A notepad document is an ordered sequence of sections, each a `# YYYY-MM-DD`
//! heading followed by word lines. [`insert_word`] is the whole mutation the
//! system performs on one: a pure function from (old content, word, date) to
//! new content, with no I/O, so the merge is testable without any network.

use chrono::NaiveDate;

/// Heading line for a calendar date, `# YYYY-MM-DD`
pub fn heading_for(date: NaiveDate) -> String {
    format!("# {}", date.format("%Y-%m-%d"))
}

/// Insert `word` as the first entry under the section for `today`
///
/// The first line equal to today's heading wins; duplicate headings further
/// down are ignored. When no section for `today` exists, a new one is created
/// at the top of the document: heading line, blank separator line, then the
/// word, with the previous content following it.
///
/// Every line is trimmed on reconstruction — the remote service always stores
/// the document that way, and this function reproduces it rather than
/// preserving surrounding whitespace. Words are not deduplicated; inserting
/// the same word twice yields two lines.
pub fn insert_word(content: &str, word: &str, today: NaiveDate) -> String {
    let heading = heading_for(today);
    let mut lines: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_string())
        .collect();

    match lines.iter().position(|line| *line == heading) {
        Some(idx) => lines.insert(idx + 1, word.to_string()),
        None => {
            lines.insert(0, heading);
            lines.insert(1, String::new());
            lines.insert(2, word.to_string());
        }
    }

    lines.join("\n")
}
