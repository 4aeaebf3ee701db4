use crate::picker_engine::models::Entry;

/// Normalise free-form text into one entry per non-blank line.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Lines are trimmed, blank lines
/// dropped, order kept. A `\r\n` pair splits into a line and an empty piece,
/// which is dropped as blank.
pub fn parse_entries(text: &str) -> Vec<Entry> {
    text.split(['\r', '\n']).filter_map(Entry::new).collect()
}

/// Join entries back into the one-per-line form `parse_entries` reads.
pub fn entries_to_text(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(Entry::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
