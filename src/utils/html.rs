/// Escape untrusted text for embedding in an HTML document.
///
/// Every character that could open a tag, close an attribute or start an
/// entity is replaced by its entity form, whitespace included. The result is
/// plain text when rendered; no markup from the input survives.
pub fn escape_text(input: &str) -> String {
    ammonia::clean_text(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_is_neutralised() {
        let escaped = escape_text("<script>alert('x')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(escaped.starts_with("&lt;script&gt;"));
    }

    #[test]
    fn plain_words_pass_through() {
        assert_eq!(escape_text("EE23-001"), "EE23-001");
    }
}
