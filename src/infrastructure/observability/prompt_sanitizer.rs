const MAX_VISIBLE_CHARS: usize = 100;

const SECRET_PREFIXES: [&str; 5] = ["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Shortens a prompt for logging and redacts anything that looks like a credential.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let cut = trimmed
            .char_indices()
            .nth(MAX_VISIBLE_CHARS)
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());
        format!("{}... ({} chars total)", &trimmed[..cut], total_chars)
    } else {
        trimmed.to_string()
    };

    SECRET_PREFIXES
        .iter()
        .fold(visible, |text, prefix| redact_after(&text, prefix))
}

fn redact_after(text: &str, prefix: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(prefix) {
        let value_start = idx + prefix.len();
        let value_end = rest[value_start..]
            .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
            .map(|i| value_start + i)
            .unwrap_or(rest.len());

        result.push_str(&rest[..value_start]);
        result.push_str("[REDACTED]");
        rest = &rest[value_end..];
    }

    result.push_str(rest);
    result
}
