//! Options shared by the predicate and the collector.

/// Configuration for tabbability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Whether to reject elements that produce no rendered boxes or are
    /// `visibility: hidden`.
    ///
    /// Turn this off in environments that carry no styling information,
    /// such as trees built from bare fixture markup.
    pub display_check: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            display_check: true,
        }
    }
}
