// Insertion-ordered word list: the value stored for each anagram class.

use std::slice;

/// Words of one anagram class, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word at the end of the list.
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Iterate in insertion order. Each call starts from the front.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.words.iter(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the words of a [`WordList`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_is_empty() {
        let list = WordList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut list = WordList::new();
        list.push("tar");
        list.push("rat");
        list.push("art");
        assert_eq!(list.iter().collect::<Vec<_>>(), ["tar", "rat", "art"]);
        assert_eq!(list.get(1), Some("rat"));
        assert_eq!(list.as_slice(), ["tar", "rat", "art"]);
    }

    #[test]
    fn iteration_restarts_per_call() {
        let list: WordList = ["a", "b"].into_iter().collect();
        assert_eq!(list.iter().count(), 2);
        assert_eq!(list.iter().count(), 2);
        assert_eq!((&list).into_iter().next(), Some("a"));
    }

    #[test]
    fn contains_is_case_sensitive() {
        let list: WordList = ["Rat"].into_iter().collect();
        assert!(list.contains("Rat"));
        assert!(!list.contains("rat"));
    }

    #[test]
    fn push_does_not_dedup() {
        let mut list = WordList::new();
        list.push("rat");
        list.push("rat");
        assert_eq!(list.len(), 2);
    }
}
