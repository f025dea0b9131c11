//! Context windows around a match span.

use std::ops::Range;

use tam_corpus::Token;

/// Returns `tokens[start..end]` clipped to the slice bounds. Never panics.
pub fn clip(tokens: &[Token], start: usize, end: usize) -> &[Token] {
    let end = end.min(tokens.len());
    let start = start.min(end);
    &tokens[start..end]
}

/// Space-joins the surface forms of `tokens`.
pub fn join_forms(tokens: &[Token]) -> String {
    let mut joined = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(&token.form);
    }
    joined
}

/// The textual context of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Tokens before the match.
    pub left: String,
    /// The matched tokens.
    pub matched: String,
    /// Tokens after the match.
    pub right: String,
}

impl Context {
    /// Builds the context of `span` with `width` tokens on each side.
    ///
    /// Windows stop at the sentence boundaries; a span partially outside the
    /// sentence is clipped as well.
    pub fn around(tokens: &[Token], span: Range<usize>, width: usize) -> Self {
        Self::between(tokens, span, width, width)
    }

    /// Like [`Context::around`] with separate left and right widths.
    pub fn between(tokens: &[Token], span: Range<usize>, left: usize, right: usize) -> Self {
        Self {
            left: join_forms(clip(tokens, span.start.saturating_sub(left), span.start)),
            matched: join_forms(clip(tokens, span.start, span.end)),
            right: join_forms(clip(tokens, span.end, span.end.saturating_add(right))),
        }
    }
}

#[cfg(test)]
mod tests {
    use tam_corpus::PartOfSpeech;

    use super::*;

    fn tokens(forms: &str) -> Vec<Token> {
        forms
            .split(' ')
            .enumerate()
            .map(|(i, f)| Token::new(i as u32 + 1, f, f, PartOfSpeech::X))
            .collect()
    }

    #[test]
    fn full_windows_in_the_middle() {
        let toks = tokens("a b c d e f g");
        let ctx = Context::around(&toks, 3..4, 2);
        assert_eq!(ctx.left, "b c");
        assert_eq!(ctx.matched, "d");
        assert_eq!(ctx.right, "e f");
    }

    #[test]
    fn uneven_widths() {
        let toks = tokens("a b c d e f g");
        let ctx = Context::between(&toks, 3..4, 1, 3);
        assert_eq!(ctx.left, "c");
        assert_eq!(ctx.right, "e f g");
    }

    #[test]
    fn windows_shrink_at_sentence_edges() {
        let toks = tokens("a b c");
        let ctx = Context::around(&toks, 0..1, 5);
        assert_eq!(ctx.left, "");
        assert_eq!(ctx.matched, "a");
        assert_eq!(ctx.right, "b c");

        let ctx = Context::around(&toks, 1..3, 5);
        assert_eq!(ctx.left, "a");
        assert_eq!(ctx.matched, "b c");
        assert_eq!(ctx.right, "");
    }

    #[test]
    fn out_of_range_clips_silently() {
        let toks = tokens("a b");
        assert!(clip(&toks, 5, 9).is_empty());
        assert!(clip(&toks, 2, 1).is_empty());
        assert_eq!(join_forms(clip(&toks, 1, 100)), "b");

        let ctx = Context::around(&toks, 1..10, usize::MAX);
        assert_eq!(ctx.left, "a");
        assert_eq!(ctx.matched, "b");
        assert_eq!(ctx.right, "");
    }

    #[test]
    fn zero_width_keeps_only_the_match() {
        let toks = tokens("a b c");
        let ctx = Context::around(&toks, 1..2, 0);
        assert_eq!((ctx.left.as_str(), ctx.right.as_str()), ("", ""));
    }
}
