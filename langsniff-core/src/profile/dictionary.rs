//! Dictionary availability lookup
//!
//! The spell checker owns the list of installed dictionaries. The registry asks
//! it once per variant while being built and stores the answer.

use std::collections::{BTreeSet, HashSet};

/// Answers whether a spell-checking dictionary is installed
pub trait DictionaryLookup {
    /// True if `dictionary` can be loaded by the spell checker
    fn dictionary_available(&self, dictionary: &str) -> bool;
}

/// Every dictionary is available
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDictionaries;

impl DictionaryLookup for AllDictionaries {
    fn dictionary_available(&self, _dictionary: &str) -> bool {
        true
    }
}

/// No dictionary is available
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictionaries;

impl DictionaryLookup for NoDictionaries {
    fn dictionary_available(&self, _dictionary: &str) -> bool {
        false
    }
}

impl DictionaryLookup for HashSet<String> {
    fn dictionary_available(&self, dictionary: &str) -> bool {
        self.contains(dictionary)
    }
}

impl DictionaryLookup for BTreeSet<String> {
    fn dictionary_available(&self, dictionary: &str) -> bool {
        self.contains(dictionary)
    }
}

impl<F> DictionaryLookup for F
where
    F: Fn(&str) -> bool,
{
    fn dictionary_available(&self, dictionary: &str) -> bool {
        self(dictionary)
    }
}
