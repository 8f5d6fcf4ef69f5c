//! Keyword and reserved-word classification.
//!
//! A deterministic automaton over a trie built from [`Keyword::ALL`] and
//! [`ReservedWord::ALL`]. Classification walks one byte per transition and
//! accepts only when the input ends on an accepting state. A missing edge,
//! or input that ends on a non-accepting state, means "identifier".
//! Matching is case-sensitive and never accepts a prefix.

use std::sync::OnceLock;

use lxc_ir::{Keyword, ReservedWord, TokenKind};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Class of an identifier-shaped lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordClass {
    Keyword,
    ReservedWord,
    Identifier,
}

/// One automaton state.
#[derive(Debug, Default)]
struct State {
    edges: FxHashMap<u8, usize>,
    accept: Option<TokenKind>,
}

/// Trie-shaped DFA over the fixed word lists.
#[derive(Debug)]
pub struct Classifier {
    states: Vec<State>,
}

impl Classifier {
    /// Build the automaton from every keyword and reserved word.
    pub fn new() -> Self {
        let mut classifier = Classifier {
            states: vec![State::default()],
        };
        for &kw in Keyword::ALL {
            classifier.insert(kw.as_str(), TokenKind::Keyword(kw));
        }
        for &word in ReservedWord::ALL {
            classifier.insert(word.as_str(), TokenKind::ReservedWord(word));
        }
        classifier
    }

    fn insert(&mut self, word: &str, kind: TokenKind) {
        let mut state = 0;
        for b in word.bytes() {
            state = match self.states[state].edges.get(&b) {
                Some(&next) => next,
                None => {
                    let next = self.states.len();
                    self.states.push(State::default());
                    self.states[state].edges.insert(b, next);
                    next
                }
            };
        }
        self.states[state].accept = Some(kind);
    }

    /// The concrete keyword or reserved-word kind for `text`, if any.
    pub fn lookup(&self, text: &str) -> Option<TokenKind> {
        let mut state = 0;
        for b in text.bytes() {
            state = *self.states[state].edges.get(&b)?;
        }
        self.states[state].accept
    }

    pub fn classify(&self, text: &str) -> WordClass {
        match self.lookup(text) {
            Some(TokenKind::Keyword(_)) => WordClass::Keyword,
            Some(TokenKind::ReservedWord(_)) => WordClass::ReservedWord,
            _ => WordClass::Identifier,
        }
    }

    /// Number of automaton states, including the start state.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

static CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

/// The process-wide classifier, built on first use.
pub fn classifier() -> &'static Classifier {
    CLASSIFIER.get_or_init(|| {
        let classifier = Classifier::new();
        debug!(states = classifier.state_count(), "built keyword automaton");
        classifier
    })
}

/// Look up a keyword or reserved word by exact spelling.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    classifier().lookup(text)
}

/// Classify an identifier-shaped lexeme.
#[inline]
pub fn classify(text: &str) -> WordClass {
    classifier().classify(text)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
