//! Context-free L-System rewriting.
//!
//! [`LSystem`] owns an alphabet, an axiom, and one production rule per
//! alphabet symbol. [`LSystem::iterate`] rewrites the axiom a bounded number
//! of generations; [`LSystem::tree`] exposes the resulting symbol string for
//! turtle interpretation.

use std::collections::HashMap;

use thiserror::Error;
use tracing::trace;

/// Default alphabet of the classic bracketed plant.
pub const DEFAULT_ALPHABET: [char; 5] = ['F', '+', '-', '[', ']'];

/// Default axiom of the classic bracketed plant.
pub const DEFAULT_AXIOM: &str = "F";

/// Default production rules, one per symbol of [`DEFAULT_ALPHABET`].
/// Only `F` expands; the structural symbols map to themselves.
pub const DEFAULT_RULES: [&str; 5] = ["F[+F]F[-F]F", "+", "-", "[", "]"];

/// Default ceiling on the generation string length, in bytes.
///
/// Rule application grows the string exponentially with the iteration count,
/// so every engine carries a hard bound. Callers with more memory to spend can
/// raise it via [`LSystem::with_max_len`].
pub const DEFAULT_MAX_TREE_LEN: usize = 1 << 22;

/// The alphabet and rule list passed to [`LSystem::configure`] disagree in
/// length. Rule lookup is defined per alphabet symbol, so the two must be
/// kept in lockstep; no partial update is applied.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("alphabet has {alphabet} symbols but {rules} rules were supplied")]
pub struct ConfigError {
    /// Number of symbols in the rejected alphabet.
    pub alphabet: usize,
    /// Number of replacement strings supplied alongside it.
    pub rules: usize,
}

/// The next generation would exceed the configured length ceiling.
///
/// Raised before the output buffer is allocated; the engine keeps the last
/// successfully built generation string.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("next generation needs {required} bytes, ceiling is {ceiling}")]
pub struct GrowthError {
    /// Exact byte length the rejected generation would have had.
    pub required: usize,
    /// Ceiling the engine was configured with.
    pub ceiling: usize,
}

/// A context-free L-System: alphabet, axiom, per-symbol production rules,
/// and the current generation string.
///
/// The engine is plain mutable state with no interior threading concerns.
/// Mutating the configuration takes effect on the next [`iterate`] call;
/// the generation string is fully recomputed per call, never patched.
///
/// [`iterate`]: Self::iterate
#[derive(Clone, Debug)]
pub struct LSystem {
    alphabet: Vec<char>,
    axiom: String,
    /// Direct symbol-to-rule lookup. Built from the positional rule list at
    /// configure time; the first occurrence of a duplicated symbol wins.
    rules: HashMap<char, String>,
    tree: String,
    max_tree_len: usize,
}

impl Default for LSystem {
    /// The classic bracketed plant: axiom `F`, rule `F → F[+F]F[-F]F`,
    /// structural symbols mapped to themselves.
    fn default() -> Self {
        let mut sys = Self {
            alphabet: Vec::new(),
            axiom: String::new(),
            rules: HashMap::new(),
            tree: String::new(),
            max_tree_len: DEFAULT_MAX_TREE_LEN,
        };
        let rules: Vec<String> = DEFAULT_RULES.iter().map(|r| r.to_string()).collect();
        // The default preset is shape-correct by construction.
        sys.configure(DEFAULT_ALPHABET.to_vec(), DEFAULT_AXIOM.to_string(), rules)
            .unwrap_or_else(|_| unreachable!());
        sys
    }
}

impl LSystem {
    /// Creates an engine pre-configured with the default bracketed plant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ceiling on generation string length, in bytes (builder form).
    pub fn with_max_len(mut self, max_tree_len: usize) -> Self {
        self.max_tree_len = max_tree_len;
        self
    }

    /// Replaces alphabet, axiom, and rules in one step.
    ///
    /// `rules[i]` is the replacement string for `alphabet[i]`. Rules may
    /// contain symbols outside the alphabet; those pass through later rewrites
    /// unchanged.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the lists disagree in length. The engine
    /// is left untouched in that case.
    pub fn configure(
        &mut self,
        alphabet: Vec<char>,
        axiom: String,
        rules: Vec<String>,
    ) -> Result<(), ConfigError> {
        if alphabet.len() != rules.len() {
            return Err(ConfigError {
                alphabet: alphabet.len(),
                rules: rules.len(),
            });
        }
        let mut map = HashMap::with_capacity(alphabet.len());
        for (sym, rule) in alphabet.iter().zip(rules) {
            map.entry(*sym).or_insert(rule);
        }
        self.alphabet = alphabet;
        self.axiom = axiom;
        self.rules = map;
        self.tree.clear();
        Ok(())
    }

    /// Rewrites the axiom for exactly `n` generations and returns the result.
    ///
    /// Each generation is built left-to-right in a single pass: a symbol with
    /// a rule is replaced by its rule string, any other symbol is copied
    /// through as-is. `iterate(0)` yields the axiom itself.
    ///
    /// The exact output length of each generation is summed up front and the
    /// buffer allocated once at that capacity, so the build never reallocates
    /// even though typical branching rules grow the string exponentially.
    ///
    /// # Errors
    /// Returns [`GrowthError`] before allocating when a generation would
    /// exceed the configured ceiling. The previous generation string stays
    /// available through [`tree`](Self::tree).
    pub fn iterate(&mut self, n: u32) -> Result<&str, GrowthError> {
        self.tree = self.axiom.clone();
        for pass in 0..n {
            let mut new_len = 0usize;
            for sym in self.tree.chars() {
                new_len += match self.rules.get(&sym) {
                    Some(rule) => rule.len(),
                    None => sym.len_utf8(),
                };
            }
            if new_len > self.max_tree_len {
                return Err(GrowthError {
                    required: new_len,
                    ceiling: self.max_tree_len,
                });
            }
            let mut next = String::with_capacity(new_len);
            for sym in self.tree.chars() {
                match self.rules.get(&sym) {
                    Some(rule) => next.push_str(rule),
                    None => next.push(sym),
                }
            }
            self.tree = next;
            trace!(pass, len = self.tree.len(), "rewrote generation");
        }
        Ok(&self.tree)
    }

    /// The current generation string, e.g. for turtle interpretation.
    ///
    /// Empty until [`iterate`](Self::iterate) has run after the last
    /// (re)configuration.
    pub fn tree(&self) -> &str {
        &self.tree
    }

    /// The configured alphabet, in order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The configured axiom.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// The rule for `sym`, if the symbol is part of the alphabet.
    pub fn rule(&self, sym: char) -> Option<&str> {
        self.rules.get(&sym).map(String::as_str)
    }
}
