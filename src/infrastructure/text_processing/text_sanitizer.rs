use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Normalizes the text of one page.
///
/// Words split across lines are rejoined, blank lines are dropped and every
/// whitespace run inside a line becomes `item_separator`.
pub fn sanitize_page_text(raw: &str, item_separator: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t' || *c == ' ')
        .collect();
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    de_hyphenated
        .lines()
        .map(|line| join_items(line, item_separator))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_items(line: &str, item_separator: &str) -> String {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .join(item_separator)
}
