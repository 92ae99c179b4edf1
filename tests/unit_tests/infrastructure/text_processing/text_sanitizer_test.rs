use quizgen::infrastructure::text_processing::sanitize_page_text;

#[test]
fn given_spaced_items_when_sanitizing_then_joins_with_separator() {
    assert_eq!(sanitize_page_text("a   b\tc", " "), "a b c");
    assert_eq!(sanitize_page_text("a   b", "|"), "a|b");
}

#[test]
fn given_blank_lines_when_sanitizing_then_drops_them() {
    assert_eq!(sanitize_page_text("one\n\n   \ntwo\n", " "), "one\ntwo");
}

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_rejoins_word() {
    assert_eq!(sanitize_page_text("extrac-\ntion", " "), "extraction");
}

#[test]
fn given_control_characters_when_sanitizing_then_strips_them() {
    assert_eq!(sanitize_page_text("Par\u{0}is\u{7}", " "), "Paris");
}
