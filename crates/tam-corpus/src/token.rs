//! Tokens and normalized part-of-speech tags.

use std::fmt;

/// Normalized part-of-speech tag.
///
/// Dialect readers map their raw tagsets onto the closed set the extractors
/// care about. Tags without a mapping are kept verbatim in [`PartOfSpeech::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Adjective.
    Adj,
    /// Adverb.
    Adv,
    /// Determiner, article or articulated preposition.
    Det,
    /// Common noun.
    Noun,
    /// Explicitly neutralized tag.
    X,
    /// Raw source tag with no normalized counterpart.
    Other(String),
}

impl PartOfSpeech {
    /// Parses a normalized tag string. Unknown strings become [`PartOfSpeech::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ADJ" => Self::Adj,
            "ADV" => Self::Adv,
            "DET" => Self::Det,
            "NOUN" => Self::Noun,
            "X" => Self::X,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the normalized tag string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Adj => "ADJ",
            Self::Adv => "ADV",
            Self::Det => "DET",
            Self::Noun => "NOUN",
            Self::X => "X",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One token of a parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Source-defined token number, unique within its sentence.
    pub index: u32,
    /// Surface form.
    pub form: String,
    /// Lemma.
    pub lemma: String,
    /// Normalized part of speech.
    pub pos: PartOfSpeech,
    /// Index of the syntactic governor; `None` when the corpus has no dependency info.
    pub head: Option<u32>,
    /// Dependency relation label; empty when unknown.
    pub deprel: String,
}

impl Token {
    /// Creates a token without dependency information.
    pub fn new(index: u32, form: &str, lemma: &str, pos: PartOfSpeech) -> Self {
        Self {
            index,
            form: form.to_string(),
            lemma: lemma.to_string(),
            pos,
            head: None,
            deprel: String::new(),
        }
    }

    /// Attaches dependency information.
    pub fn with_dependency(mut self, head: u32, deprel: &str) -> Self {
        self.head = Some(head);
        self.deprel = deprel.to_string();
        self
    }

    /// Returns true when the token's dependency relation is unknown.
    pub fn has_unknown_relation(&self) -> bool {
        self.deprel.is_empty()
    }

    /// Returns true if this token has part of speech `pos`.
    pub fn is(&self, pos: &PartOfSpeech) -> bool {
        &self.pos == pos
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.head.map_or_else(|| "-1".to_string(), |h| h.to_string());
        write!(f, "{}/{}/{}:{}", self.form, self.pos, self.deprel, head)
    }
}

/// Dependency check shared by every ngram sub-pattern.
///
/// Passes when `dependent` carries no relation label, or when its head is
/// `governor`. A token with a label but no head never confirms a link.
pub fn confirmed_or_unknown(dependent: &Token, governor: &Token) -> bool {
    dependent.has_unknown_relation() || dependent.head == Some(governor.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(index: u32, form: &str) -> Token {
        Token::new(index, form, form, PartOfSpeech::Noun)
    }

    #[test]
    fn unknown_relation_always_passes() {
        let governor = tok(7, "casa");
        let mut dependent = tok(1, "la");
        assert!(confirmed_or_unknown(&dependent, &governor));

        dependent.head = Some(3);
        assert!(confirmed_or_unknown(&dependent, &governor));
    }

    #[test]
    fn known_relation_must_match_head() {
        let governor = tok(7, "casa");
        let dependent = tok(1, "la").with_dependency(7, "det");
        assert!(confirmed_or_unknown(&dependent, &governor));

        let elsewhere = tok(1, "la").with_dependency(4, "det");
        assert!(!confirmed_or_unknown(&elsewhere, &governor));
    }

    #[test]
    fn label_without_head_does_not_confirm() {
        let governor = tok(7, "casa");
        let mut dependent = tok(1, "la");
        dependent.deprel = "det".to_string();
        assert!(!confirmed_or_unknown(&dependent, &governor));
    }

    #[test]
    fn tag_round_trip_and_other() {
        assert_eq!(PartOfSpeech::from_tag("NOUN"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_tag("VER:fin").as_str(), "VER:fin");
    }

    #[test]
    fn display_matches_debug_shape() {
        let token = tok(2, "casa").with_dependency(1, "obj");
        assert_eq!(token.to_string(), "casa/NOUN/obj:1");
        assert_eq!(tok(2, "casa").to_string(), "casa/NOUN/:-1");
    }
}
