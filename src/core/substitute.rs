use crate::utils::error::{FaleproxyError, Result};
use regex::Regex;

/// Case shape of one matched occurrence of the target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    Upper,
    Lower,
    Capitalized,
    Mixed,
}

/// Classifies a matched substring by its case shape. Non-alphabetic
/// characters are neutral and never disqualify a shape.
pub fn classify(word: &str) -> CasePattern {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CasePattern::Mixed;
    };
    let rest_is_lower = chars.all(|c| !c.is_alphabetic() || c.is_lowercase());

    if word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()) {
        CasePattern::Upper
    } else if word.chars().all(|c| !c.is_alphabetic() || c.is_lowercase()) {
        CasePattern::Lower
    } else if first.is_uppercase() && rest_is_lower {
        CasePattern::Capitalized
    } else {
        CasePattern::Mixed
    }
}

/// Case-insensitive, case-preserving word substitution.
///
/// Compiled once and reused across requests. `apply` rewrites every
/// occurrence of the target word, mirroring the case shape of each
/// match; mixed-case matches fall back to the capitalized substitute
/// (inherited, documented behavior).
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    substitute: String,
}

impl Substitution {
    pub fn new(target: &str, substitute: &str) -> Result<Self> {
        if target.trim().is_empty() {
            return Err(FaleproxyError::InvalidConfigValue {
                field: "target_word".to_string(),
                reason: "value cannot be empty or whitespace-only".to_string(),
            });
        }
        if substitute.trim().is_empty() {
            return Err(FaleproxyError::InvalidConfigValue {
                field: "substitute_word".to_string(),
                reason: "value cannot be empty or whitespace-only".to_string(),
            });
        }

        let pattern = Regex::new(&format!("(?i){}", regex::escape(target)))?;
        Ok(Self {
            pattern,
            substitute: substitute.to_string(),
        })
    }

    /// Cheap pre-check so callers never rewrite text without a match.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let matched = &caps[0];
                match classify(matched) {
                    CasePattern::Upper => self.substitute.to_uppercase(),
                    CasePattern::Lower => self.substitute.to_lowercase(),
                    CasePattern::Capitalized | CasePattern::Mixed => capitalize(&self.substitute),
                }
            })
            .into_owned()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yale() -> Substitution {
        Substitution::new("Yale", "Fale").unwrap()
    }

    #[test]
    fn test_classify_case_shapes() {
        assert_eq!(classify("YALE"), CasePattern::Upper);
        assert_eq!(classify("yale"), CasePattern::Lower);
        assert_eq!(classify("Yale"), CasePattern::Capitalized);
        assert_eq!(classify("yAlE"), CasePattern::Mixed);
        assert_eq!(classify("YaLE"), CasePattern::Mixed);
    }

    #[test]
    fn test_apply_preserves_case() {
        let sub = yale();
        assert_eq!(sub.apply("YALE"), "FALE");
        assert_eq!(sub.apply("yale"), "fale");
        assert_eq!(sub.apply("Yale"), "Fale");
        assert_eq!(sub.apply("yAlE"), "Fale");
    }

    #[test]
    fn test_apply_multiple_occurrences() {
        let sub = yale();
        assert_eq!(
            sub.apply("Yale visited yale and shouted YALE"),
            "Fale visited fale and shouted FALE"
        );
    }

    #[test]
    fn test_apply_inside_larger_words() {
        let sub = yale();
        assert_eq!(sub.apply("admissions@yale.edu"), "admissions@fale.edu");
        assert_eq!(sub.apply("Yale's campus"), "Fale's campus");
    }

    #[test]
    fn test_text_without_match_is_untouched() {
        let sub = yale();
        assert!(!sub.is_match("Harvard University"));
        assert_eq!(sub.apply("Harvard University"), "Harvard University");
    }

    #[test]
    fn test_empty_words_are_rejected() {
        assert!(Substitution::new("", "Fale").is_err());
        assert!(Substitution::new("Yale", "  ").is_err());
    }

    #[test]
    fn test_target_with_regex_metacharacters_is_escaped() {
        let sub = Substitution::new("c.a", "x").unwrap();
        assert_eq!(sub.apply("c.a cba"), "x cba");
    }
}
