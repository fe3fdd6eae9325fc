//! Literal token matching over a single document.

use aho_corasick::AhoCorasick;
use basecheck_core::errors::RegistryError;

use crate::tokens::ScannerToken;

/// A validated token occurrence: byte offset plus the index of the token in
/// the scanner's registry slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    pub offset: usize,
    pub token_index: usize,
}

/// Scans one document's text for every registered token.
///
/// All token literals are compiled into a single automaton, so one pass over
/// the text finds every occurrence of every token, including occurrences
/// whose spans overlap. Each raw occurrence is then filtered through the
/// token's boundary rule.
///
/// Matches come back in left-to-right document order per token; callers must
/// not rely on any global offset order across tokens (the orchestrator
/// re-sorts findings at the end).
pub struct DocumentScanner {
    automaton: AhoCorasick,
    tokens: Vec<ScannerToken>,
}

impl DocumentScanner {
    /// Compile a scanner from a token list.
    /// Failure here is a fatal startup error, surfaced before any scan.
    pub fn new(tokens: Vec<ScannerToken>) -> Result<Self, RegistryError> {
        if tokens.is_empty() {
            return Err(RegistryError::Empty);
        }
        let automaton = AhoCorasick::new(tokens.iter().map(|t| t.text.as_bytes()))
            .map_err(|e| RegistryError::BuildFailed(e.to_string()))?;
        Ok(Self { automaton, tokens })
    }

    /// All boundary-validated token occurrences in `text`.
    pub fn scan(&self, text: &str) -> Vec<TokenMatch> {
        self.automaton
            .find_overlapping_iter(text)
            .filter_map(|m| {
                let index = m.pattern().as_usize();
                let token = &self.tokens[index];
                token
                    .boundary
                    .is_valid(text, m.start(), m.end())
                    .then_some(TokenMatch {
                        offset: m.start(),
                        token_index: index,
                    })
            })
            .collect()
    }

    /// The token behind a match.
    pub fn token(&self, token_index: usize) -> &ScannerToken {
        &self.tokens[token_index]
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Boundary;

    fn scanner(tokens: &[(&str, &str, Boundary)]) -> DocumentScanner {
        DocumentScanner::new(
            tokens
                .iter()
                .map(|(text, id, boundary)| ScannerToken::new(text, id, *boundary))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_token_list_is_rejected() {
        assert!(matches!(
            DocumentScanner::new(Vec::new()),
            Err(RegistryError::Empty)
        ));
    }

    #[test]
    fn finds_every_occurrence_of_a_token() {
        let s = scanner(&[("any", "promise-any", Boundary::None)]);
        let matches = s.scan("any time, any place");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].offset, 0);
        assert_eq!(matches[1].offset, 10);
    }

    #[test]
    fn boundary_filters_raw_occurrences() {
        let s = scanner(&[("any", "promise-any", Boundary::Identifier)]);
        assert!(s.scan("company.anyOf(x)").is_empty());
        let matches = s.scan("Promise.any(tasks)");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].offset, 8);
    }

    #[test]
    fn overlapping_tokens_both_match() {
        let s = scanner(&[
            ("container-type", "container-queries", Boundary::Css),
            ("container-type: inline-size", "container-queries", Boundary::None),
        ]);
        let matches = s.scan("main { container-type: inline-size; }");
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn css_has_pseudo_class() {
        let s = scanner(&[(":has", "has", Boundary::CssFunction)]);
        assert!(s.scan(":hasFocus").is_empty());
        let matches = s.scan("div:has(p)");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].offset, 3);
    }

    #[test]
    fn tokens_do_not_interact() {
        let s = scanner(&[
            ("text-wrap", "text-wrap", Boundary::Css),
            (":has", "has", Boundary::CssFunction),
        ]);
        let matches = s.scan("main:has(article) { text-wrap: balance; }");
        assert_eq!(matches.len(), 2);
    }
}
