use std::fmt;

/// Platform content-type identifier of a clipboard payload
/// (e.g. `public.utf8-plain-text`, `public.png`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag(pub String);

impl TypeTag {
    /// Tag assigned to UTF-8 text read from the system clipboard.
    pub const UTF8_PLAIN_TEXT: &'static str = "public.utf8-plain-text";

    pub fn utf8_plain_text() -> Self {
        Self(Self::UTF8_PLAIN_TEXT.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag denotes plain UTF-8 text.
    ///
    /// Besides the macOS UTI, the equivalent names used by X11, Wayland and
    /// generic MIME-based clipboards are accepted.
    pub fn is_plain_text(&self) -> bool {
        let tag = self.0.as_str();
        let lower = tag.to_ascii_lowercase();
        tag.eq_ignore_ascii_case(Self::UTF8_PLAIN_TEXT)
            || tag.eq_ignore_ascii_case("UTF8_STRING")
            || lower == "text/plain;charset=utf-8"
            || lower == "text/plain"
    }

    /// Last `/`-separated segment of the tag, ignoring trailing slashes.
    ///
    /// Mirrors the usual path basename rules: an empty tag yields `"."` and a
    /// tag made only of slashes yields `"/"`.
    pub fn basename(&self) -> &str {
        if self.0.is_empty() {
            return ".";
        }
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() {
            return "/";
        }
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeTag {
    fn from(value: &str) -> Self {
        TypeTag(value.to_string())
    }
}

impl From<String> for TypeTag {
    fn from(value: String) -> Self {
        TypeTag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_plain_text_aliases() {
        assert!(TypeTag::utf8_plain_text().is_plain_text());
        assert!(TypeTag::from("UTF8_STRING").is_plain_text());
        assert!(TypeTag::from("text/plain;charset=utf-8").is_plain_text());
        assert!(!TypeTag::from("public.png").is_plain_text());
        assert!(!TypeTag::from("public.html").is_plain_text());
    }

    #[test]
    fn basename_follows_path_rules() {
        assert_eq!(TypeTag::from("public.png").basename(), "public.png");
        assert_eq!(TypeTag::from("image/png").basename(), "png");
        assert_eq!(TypeTag::from("image/png/").basename(), "png");
        assert_eq!(TypeTag::from("//").basename(), "/");
        assert_eq!(TypeTag::from("").basename(), ".");
    }
}
