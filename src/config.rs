//! Dispatch configuration for tagcall

/// Dispatch configuration
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Emit a debug trace when an unqualified name matches nothing
    pub trace_misses: bool,
    /// Install and honor the deprecated `_as_node` spellings
    pub legacy_as_node: bool,
    /// Retry a missed unqualified lookup once in the root scope
    pub root_fallback: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            trace_misses: true,
            legacy_as_node: true,
            root_fallback: false,
        }
    }
}

impl DispatchConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the miss trace
    pub fn with_trace_misses(mut self, enabled: bool) -> Self {
        self.trace_misses = enabled;
        self
    }

    /// Enable or disable the `_as_node` spellings
    pub fn with_legacy_as_node(mut self, enabled: bool) -> Self {
        self.legacy_as_node = enabled;
        self
    }

    /// Enable or disable the root-scope retry
    pub fn with_root_fallback(mut self, enabled: bool) -> Self {
        self.root_fallback = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_config_traces_misses() {
        let config = DispatchConfig::default();
        assert!(config.trace_misses);
    }

    #[test]
    fn test_default_config_keeps_legacy_as_node() {
        let config = DispatchConfig::default();
        assert!(config.legacy_as_node);
    }

    #[test]
    fn test_default_config_has_no_root_fallback() {
        let config = DispatchConfig::default();
        assert!(!config.root_fallback);
    }

    // ========================================
    // Builder method tests
    // ========================================

    #[test]
    fn test_with_legacy_as_node() {
        let config = DispatchConfig::new().with_legacy_as_node(false);
        assert!(!config.legacy_as_node);
        // Other fields unchanged
        assert!(config.trace_misses);
        assert!(!config.root_fallback);
    }

    #[test]
    fn test_builder_chain_all() {
        let config = DispatchConfig::new()
            .with_trace_misses(false)
            .with_legacy_as_node(false)
            .with_root_fallback(true);

        assert!(!config.trace_misses);
        assert!(!config.legacy_as_node);
        assert!(config.root_fallback);
    }

    #[test]
    fn test_builder_override() {
        let config = DispatchConfig::new().with_root_fallback(true).with_root_fallback(false);

        assert!(!config.root_fallback); // Last value wins
    }
}
