//! Context block construction and citation labels.

use docqa_search::types::display_text;
use docqa_search::SearchRow;

/// Separator between title and location in a citation.
const CITATION_SEPARATOR: &str = " — ";

/// Citation label for a row, e.g. `Syllabus — syllabus.pdf (p.3)`.
///
/// A missing title or location drops the separator; the page marker is only
/// added for a truthy `page`.
pub fn citation_label(row: &SearchRow) -> String {
    let joined = format!("{}{}{}", row.title(), CITATION_SEPARATOR, row.url_or_path());
    let mut label = joined
        .trim_matches(|c: char| c == ' ' || c == '—')
        .to_string();

    if let Some(page) = row.page() {
        label.push_str(&format!(" (p.{})", display_text(page)));
    }

    label
}

/// One labeled source block followed by its excerpt.
pub fn context_entry(row: &SearchRow) -> String {
    format!("[Source] {}\n{}", citation_label(row), row.chunk_text())
}

/// All context entries in row order, separated by a blank line.
pub fn build_context(rows: &[SearchRow]) -> String {
    rows.iter()
        .map(context_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Distinct non-empty titles in first-seen order.
pub fn source_titles(rows: &[SearchRow]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for title in rows.iter().map(SearchRow::title) {
        if !title.is_empty() && !titles.contains(&title) {
            titles.push(title);
        }
    }
    titles
}
