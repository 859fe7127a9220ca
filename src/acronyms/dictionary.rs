use super::AcronymList;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

lazy_static! {
    // Acronyms commonly found in programming identifiers, lowercase
    static ref COMMON_ACRONYMS: HashSet<&'static str> = [
        "html", "http", "https",
        "jpeg", "jpg", "json",
        "pdf", "png",
        "ssh", "svg",
        "url", "utc", "utf8", "utf16",
        "xml",
    ]
    .into_iter()
    .collect();
}

/// A list of acronyms commonly found in programming identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonAcronyms;

impl CommonAcronyms {
    pub fn words() -> impl Iterator<Item = &'static str> {
        COMMON_ACRONYMS.iter().copied()
    }
}

impl AcronymList for CommonAcronyms {
    fn is_acronym(&self, text: &str) -> bool {
        COMMON_ACRONYMS.contains(text.to_lowercase().as_str())
    }
}

/// A user-built acronym list, optionally layered over [`CommonAcronyms`].
/// Lookups ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcronymSet {
    words: HashSet<String>,
    include_common: bool,
}

impl AcronymSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set that also recognizes everything in [`CommonAcronyms`].
    pub fn with_common() -> Self {
        Self {
            words: HashSet::new(),
            include_common: true,
        }
    }

    pub fn insert(&mut self, acronym: &str) -> bool {
        let acronym = acronym.trim();
        if acronym.is_empty() {
            return false;
        }
        self.words.insert(acronym.to_lowercase())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(&text.to_lowercase())
            || (self.include_common && CommonAcronyms.is_acronym(text))
    }

    /// Number of user-supplied acronyms (the common list is not counted).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Add acronyms from a newline-separated file. Blank lines and lines
    /// starting with `#` are skipped. Returns the number of new entries.
    pub fn extend_from_path(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read acronym list: {}", path.display()))?;

        let mut added = 0;
        for (line_num, line) in content.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if word.chars().any(char::is_whitespace) {
                tracing::warn!(
                    path = %path.display(),
                    line = line_num + 1,
                    "Skipping acronym entry containing whitespace"
                );
                continue;
            }
            if self.insert(word) {
                added += 1;
            }
        }

        tracing::debug!(path = %path.display(), added, "Loaded acronym list");
        Ok(added)
    }
}

impl AcronymList for AcronymSet {
    fn is_acronym(&self, text: &str) -> bool {
        self.contains(text)
    }
}

impl<S: AsRef<str>> FromIterator<S> for AcronymSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = AcronymSet::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for AcronymSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
