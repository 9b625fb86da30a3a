// Index build options.

use crate::backend::Backend;

/// What the builder does after meeting a word that is already in its class.
///
/// The duplicate itself is never stored twice; the policy only decides
/// whether the rest of the word list is still processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Skip the duplicate and continue with the next word.
    #[default]
    Skip,
    /// Stop the build at the first duplicate. The words indexed so far stay
    /// queryable; the remaining words are not indexed.
    StopBuild,
}

/// Options for building an [`AnagramIndex`](crate::AnagramIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexOptions {
    pub backend: Backend,
    pub duplicate_policy: DuplicatePolicy,
}

impl IndexOptions {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}
