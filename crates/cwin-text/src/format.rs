#![forbid(unsafe_code)]

//! `%s` template substitution for theme format strings.

/// Substitute `value` for every `%s` in `template`; `%%` yields `%`.
///
/// Any other `%` sequence is copied through unchanged.
///
/// ```
/// use cwin_text::format::apply_template;
///
/// assert_eq!(apply_template("%s.", "1"), "1.");
/// assert_eq!(apply_template("[%s] 100%%", "ni"), "[ni] 100%");
/// assert_eq!(apply_template("%d", "x"), "%d");
/// ```
pub fn apply_template(template: &str, value: &str) -> String {
    let mut out = String::with_capacity(template.len() + value.len());
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                out.push_str(value);
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::apply_template;

    #[test]
    fn plain_template_passes_through() {
        assert_eq!(apply_template("%s", "你好"), "你好");
        assert_eq!(apply_template("", "x"), "");
        assert_eq!(apply_template("ab", "x"), "ab");
    }

    #[test]
    fn repeated_and_trailing_percent() {
        assert_eq!(apply_template("%s-%s", "a"), "a-a");
        assert_eq!(apply_template("50%", "a"), "50%");
    }
}
