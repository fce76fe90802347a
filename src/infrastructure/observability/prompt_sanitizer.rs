const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_PATTERNS: [(&str, &str); 5] = [
    ("Bearer ", "Bearer [REDACTED]"),
    ("api_key=", "api_key=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
    ("secret=", "secret=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
];

const KEY_PREFIX: &str = "sk-";
const REDACTED: &str = "[REDACTED]";

/// Shortens caller-provided scenario text for logging and strips anything
/// that looks like a credential.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    redact_secrets(&truncate(trimmed))
}

/// Reduces a backend error body to something safe to hand back to callers:
/// the provider's `error.message` when the body is JSON, otherwise the raw
/// text, shortened and with credentials masked. Providers echo the rejected
/// key in 401 bodies.
pub fn sanitize_upstream_error(body: &str) -> String {
    let message = upstream_message(body).unwrap_or_else(|| body.trim().to_string());

    if message.trim().is_empty() {
        return String::from("no error detail");
    }

    redact_secrets(&truncate(message.trim()))
}

fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error").unwrap_or(&value);

    error
        .get("message")
        .and_then(serde_json::Value::as_str)
        .or_else(|| error.as_str())
        .map(str::to_string)
}

fn truncate(text: &str) -> String {
    let total_chars = text.chars().count();
    if total_chars > MAX_VISIBLE_CHARS {
        let head: String = text.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        text.to_string()
    }
}

fn redact_secrets(text: &str) -> String {
    let text = SENSITIVE_PATTERNS
        .iter()
        .fold(text.to_string(), |text, (pattern, replacement)| {
            redact_all(&text, pattern, replacement)
        });
    redact_key_tokens(&text)
}

fn redact_all(text: &str, pattern: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(pattern) {
        result.push_str(&rest[..idx]);
        result.push_str(replacement);

        let value = &rest[idx + pattern.len()..];
        let end = value
            .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
            .unwrap_or(value.len());
        rest = &value[end..];
    }

    result.push_str(rest);
    result
}

/// Masks `sk-...` keys, including partly starred ones like `sk-ab***yz`. The
/// prefix only counts at the start of a word so `task-force` survives.
fn redact_key_tokens(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(KEY_PREFIX) {
        result.push_str(&rest[..idx]);
        let value = &rest[idx..];

        if result.chars().next_back().is_some_and(char::is_alphanumeric) {
            result.push_str(KEY_PREFIX);
            rest = &value[KEY_PREFIX.len()..];
            continue;
        }

        let end = value
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '-' | '_' | '*')))
            .unwrap_or(value.len());
        result.push_str(REDACTED);
        rest = &value[end..];
    }

    result.push_str(rest);
    result
}
