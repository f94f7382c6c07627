//! Word tokenizer for the ranking pipeline.
//!
//! Splits a line into lowercased word tokens: a token starts and ends on a
//! word character (Unicode alphanumeric or `_`) and may contain interior
//! apostrophes, matching the pattern `\w[\w']*\w|\w`. A plain scanner over
//! `char_indices`; no backtracking is needed for this grammar.

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lazy iterator of lowercased word tokens in `line`, left to right.
pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens { rest: line }
}

pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // skip to the next word character
        let start = match self.rest.char_indices().find(|&(_, c)| is_word(c)) {
            Some((i, _)) => i,
            None => {
                self.rest = "";
                return None;
            }
        };
        self.rest = &self.rest[start..];

        // maximal run of word characters and apostrophes
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| !is_word(c) && c != '\'')
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let run = &self.rest[..end];
        self.rest = &self.rest[end..];

        // the run starts on a word character; trimming trailing apostrophes
        // makes it end on one too, so the token is never empty
        Some(run.trim_end_matches('\'').to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(line: &str) -> Vec<String> {
        tokens(line).collect()
    }

    /// Invariant: words split on non-word characters and fold to lowercase.
    #[test]
    fn splits_and_lowercases() {
        assert_eq!(toks("The quick, Brown FOX."), ["the", "quick", "brown", "fox"]);
    }

    /// Invariant: interior apostrophes stay inside the token; leading and
    /// trailing apostrophes are not part of any token.
    #[test]
    fn apostrophe_handling() {
        assert_eq!(toks("Don't stop"), ["don't", "stop"]);
        assert_eq!(toks("'tis the season"), ["tis", "the", "season"]);
        assert_eq!(toks("rockin' beats"), ["rockin", "beats"]);
        assert_eq!(toks("a''b c''"), ["a''b", "c"]);
        // apostrophes alone produce nothing
        assert_eq!(toks("'' ' '''"), Vec::<String>::new());
    }

    /// Invariant: single word characters are tokens.
    #[test]
    fn single_char_tokens() {
        assert_eq!(toks("a b I"), ["a", "b", "i"]);
        assert_eq!(toks("x"), ["x"]);
    }

    /// Invariant: digits and underscores count as word characters.
    #[test]
    fn digits_and_underscores() {
        assert_eq!(toks("x1 2y some_name"), ["x1", "2y", "some_name"]);
        assert_eq!(toks("_leading and trailing_"), ["_leading", "and", "trailing_"]);
    }

    /// Invariant: tokenization is Unicode-aware, in both the word-character
    /// class and the case fold.
    #[test]
    fn unicode_words() {
        assert_eq!(toks("CAFÉ naïve"), ["café", "naïve"]);
        assert_eq!(toks("добрый день"), ["добрый", "день"]);
    }

    /// Invariant: empty and all-separator lines yield no tokens; iteration
    /// is fused afterwards.
    #[test]
    fn empty_and_separator_only_lines() {
        assert_eq!(toks(""), Vec::<String>::new());
        assert_eq!(toks(" \t .,;!?--- "), Vec::<String>::new());

        let mut it = tokens("one");
        assert_eq!(it.next(), Some("one".to_string()));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
