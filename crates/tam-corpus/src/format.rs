//! Line formats of the three corpus dialects.
//!
//! A [`LineFormat`] classifies one line at a time; [`crate::SentenceReader`]
//! owns the buffering, decoding and sentence assembly shared by all dialects.

use crate::{Dialect, Token, TextEncoding};

/// Classification of a single corpus line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Ends the current sentence (if any) and starts a new one.
    Boundary,
    /// Markup or blank line with no effect on the current sentence.
    Skip,
    /// A line the dialect tolerates but cannot use.
    Ignored,
    /// A token belonging to the current sentence.
    Token(Token),
}

/// Per-dialect line parser.
pub trait LineFormat {
    /// Dialect this format reads.
    fn dialect(&self) -> Dialect;

    /// Classifies one line, with the line terminator already removed.
    ///
    /// Returns a human-readable reason when the line is a malformed token line.
    fn parse_line(&mut self, line: &str) -> Result<Line, String>;

    /// Encoding of the underlying files.
    fn encoding(&self) -> TextEncoding {
        self.dialect().encoding()
    }
}

impl<F: LineFormat + ?Sized> LineFormat for Box<F> {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn parse_line(&mut self, line: &str) -> Result<Line, String> {
        (**self).parse_line(line)
    }
}

/// Returns the line format for `dialect`.
pub fn format_for(dialect: Dialect) -> Box<dyn LineFormat> {
    match dialect {
        Dialect::Itwac => Box::new(ItwacFormat::default()),
        Dialect::Repubblica => Box::new(RepubblicaFormat),
        Dialect::WikiConll => Box::new(WikiConllFormat),
    }
}

/// ITWAC: `form<TAB>tag<TAB>lemma`, tokens numbered by position from 1.
#[derive(Debug, Default)]
pub struct ItwacFormat {
    /// Running line counter within the current sentence.
    counter: u32,
}

impl LineFormat for ItwacFormat {
    fn dialect(&self) -> Dialect {
        Dialect::Itwac
    }

    fn parse_line(&mut self, line: &str) -> Result<Line, String> {
        if line.starts_with("<s") {
            self.counter = 0;
            return Ok(Line::Boundary);
        }
        if line.starts_with('<') {
            return Ok(Line::Skip);
        }

        // Every non-markup line advances the numbering, usable or not.
        self.counter += 1;
        let fields: Vec<&str> = line.trim().split('\t').collect();
        let &[form, tag, lemma] = fields.as_slice() else {
            return Ok(Line::Ignored);
        };

        let pos = Dialect::Itwac.normalize_tag(tag);
        Ok(Line::Token(Token::new(self.counter, form, lemma, pos)))
    }
}

/// REPUBBLICA: CoNLL-like columns with mandatory head and relation.
#[derive(Debug, Default)]
pub struct RepubblicaFormat;

impl LineFormat for RepubblicaFormat {
    fn dialect(&self) -> Dialect {
        Dialect::Repubblica
    }

    fn parse_line(&mut self, line: &str) -> Result<Line, String> {
        if line.starts_with("<s") {
            return Ok(Line::Boundary);
        }
        if line.starts_with('<') || line.trim().is_empty() {
            return Ok(Line::Skip);
        }

        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() < 8 {
            return Err(format!("expected 8 columns, found {}", fields.len()));
        }

        let index = parse_index(fields[0], "token id")?;
        let head = parse_index(fields[6].trim(), "head")?;
        let pos = Dialect::Repubblica.normalize_tag(fields[4].trim());
        let token = Token::new(index, fields[1].trim(), fields[2].trim(), pos)
            .with_dependency(head, fields[7].trim());
        Ok(Line::Token(token))
    }
}

/// WIKICONLL: CoNLL columns; head and relation may be missing.
#[derive(Debug, Default)]
pub struct WikiConllFormat;

impl LineFormat for WikiConllFormat {
    fn dialect(&self) -> Dialect {
        Dialect::WikiConll
    }

    fn parse_line(&mut self, line: &str) -> Result<Line, String> {
        let line = line.trim();
        if line.starts_with("<doc") || line.is_empty() {
            return Ok(Line::Boundary);
        }
        if line.starts_with("</doc") {
            return Ok(Line::Skip);
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            return Err(format!("expected at least 4 columns, found {}", fields.len()));
        }

        let index = parse_index(fields[0], "token id")?;
        let pos = Dialect::WikiConll.normalize_tag(fields[3]);
        let mut token = Token::new(index, fields[1], fields[2], pos);

        let dependency = fields
            .get(6)
            .and_then(|head| head.parse::<u32>().ok())
            .zip(fields.get(7));
        if let Some((head, deprel)) = dependency {
            token = token.with_dependency(head, deprel);
        }
        Ok(Line::Token(token))
    }
}

/// Parses a non-negative integer column.
fn parse_index(field: &str, what: &str) -> Result<u32, String> {
    field
        .parse::<u32>()
        .map_err(|_| format!("{what} is not a non-negative integer: {field:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartOfSpeech;

    fn token(line: Result<Line, String>) -> Token {
        match line {
            Ok(Line::Token(token)) => token,
            other => panic!("expected token, got {other:?}"),
        }
    }

    #[test]
    fn itwac_numbers_tokens_per_sentence() {
        let mut format = ItwacFormat::default();
        assert_eq!(format.parse_line("<s>"), Ok(Line::Boundary));
        let first = token(format.parse_line("La\tART:def\til"));
        assert_eq!(first.index, 1);
        assert_eq!(first.pos, PartOfSpeech::Det);
        assert_eq!(first.lemma, "il");
        assert!(first.head.is_none());

        assert_eq!(format.parse_line("rotto"), Ok(Line::Ignored));
        let third = token(format.parse_line("casa\tNOUN\tcasa"));
        assert_eq!(third.index, 3);

        assert_eq!(format.parse_line("</s>"), Ok(Line::Skip));
        format.parse_line("<s>").unwrap();
        assert_eq!(token(format.parse_line("Una\tART\tuno")).index, 1);
    }

    #[test]
    fn repubblica_requires_dependency_columns() {
        let mut format = RepubblicaFormat;
        let tok = token(format.parse_line("2\tcasa\tcasa\tS\tS\tnum=s\t4\tsubj"));
        assert_eq!(tok.index, 2);
        assert_eq!(tok.pos, PartOfSpeech::Noun);
        assert_eq!(tok.head, Some(4));
        assert_eq!(tok.deprel, "subj");

        assert!(format.parse_line("2\tcasa\tcasa").is_err());
        assert!(format.parse_line("x\tcasa\tcasa\tS\tS\t_\t4\tsubj").is_err());
        assert_eq!(format.parse_line("<s id=\"1\">"), Ok(Line::Boundary));
        assert_eq!(format.parse_line("</s>"), Ok(Line::Skip));
    }

    #[test]
    fn wikiconll_dependency_is_optional() {
        let mut format = WikiConllFormat;
        let with = token(format.parse_line("1\tmolto\tmolto\tB\tB\t_\t2\tadvmod"));
        assert_eq!(with.pos, PartOfSpeech::Adv);
        assert_eq!(with.head, Some(2));
        assert_eq!(with.deprel, "advmod");

        let without = token(format.parse_line("1\tmolto\tmolto\tB"));
        assert!(without.head.is_none());
        assert!(without.has_unknown_relation());

        let bad_head = token(format.parse_line("1\tmolto\tmolto\tB\tB\t_\t_\t_"));
        assert!(bad_head.head.is_none());

        assert_eq!(format.parse_line(""), Ok(Line::Boundary));
        assert_eq!(format.parse_line("<doc id=\"3\">"), Ok(Line::Boundary));
        assert_eq!(format.parse_line("</doc>"), Ok(Line::Skip));
    }
}
