use serde::Serialize;

/// One entry of the fixed target-language set offered in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "te", name: "Telugu" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "ta", name: "Tamil" },
    Language { code: "kn", name: "Kannada" },
];

impl Language {
    pub fn from_code(code: &str) -> Option<Language> {
        LANGUAGES.iter().copied().find(|l| l.code == code)
    }

    /// Dropdown label, e.g. "English (en)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code() {
        let lang = Language::from_code("te").unwrap();
        assert_eq!(lang.name, "Telugu");
        assert!(Language::from_code("xx").is_none());
        assert!(Language::from_code("EN").is_none());
    }

    #[test]
    fn label_format() {
        let lang = Language::from_code("fr").unwrap();
        assert_eq!(lang.label(), "French (fr)");
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
        assert_eq!(LANGUAGES.len(), 8);
    }
}
