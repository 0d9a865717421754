//! Original and normalized views over OCR text.

/// Which view of the text a rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextView {
    /// Text as delivered by OCR; line breaks separate fields.
    Original,
    /// Whitespace collapsed to single spaces; tolerates line breaks inside numbers.
    Normalized,
}

/// Both views of one OCR text, built once per extraction.
#[derive(Debug, Clone)]
pub struct TextViews<'a> {
    original: &'a str,
    normalized: String,
}

impl<'a> TextViews<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            original: text,
            normalized: normalize(text),
        }
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn get(&self, view: TextView) -> &str {
        match view {
            TextView::Original => self.original,
            TextView::Normalized => &self.normalized,
        }
    }
}

/// Unify line endings and collapse every whitespace run into one space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  TOTAL\r\n S/.   800.00 \n"), "TOTAL S/. 800.00");
        assert_eq!(normalize("\t\n"), "");
    }

    #[test]
    fn test_views() {
        let views = TextViews::new("RUC:\n20486760576");
        assert_eq!(views.get(TextView::Original), "RUC:\n20486760576");
        assert_eq!(views.get(TextView::Normalized), "RUC: 20486760576");
    }
}
