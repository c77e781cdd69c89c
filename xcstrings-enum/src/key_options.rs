//! Options controlling which catalog keys become enum cases, and in which order.

/// Key selection options for [`crate::Catalog::keys`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyOptions {
    /// Emit keys in lexicographic order instead of catalog order.
    pub sort_keys: bool,
    /// Leave out keys whose extraction state is `stale`.
    pub skip_stale: bool,
}

impl KeyOptions {
    /// Creates default key options: catalog order, all keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables lexicographic ordering.
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Enables/disables dropping stale keys.
    pub fn with_skip_stale(mut self, skip_stale: bool) -> Self {
        self.skip_stale = skip_stale;
        self
    }
}
