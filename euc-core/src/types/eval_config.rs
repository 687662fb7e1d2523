//! Evaluation configuration
//!
//! Pure data, shared by native hosts and the WASM bindings. The engine itself
//! places no bound on pattern length; hosts that evaluate untrusted input opt
//! into a cap here.

/// Options applied by an [`Evaluator`](crate::parser::Evaluator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalConfig {
    /// Largest pattern length any intermediate step may produce.
    /// `None` means unbounded.
    pub max_len: Option<usize>,
}

impl EvalConfig {
    /// Unbounded evaluation (the default)
    pub fn unbounded() -> Self {
        Self { max_len: None }
    }

    /// Cap every intermediate pattern at `max_len` steps
    pub fn capped(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
        }
    }

    /// Whether a pattern of `len` steps is allowed
    pub fn allows(&self, len: usize) -> bool {
        self.max_len.is_none_or(|max| len <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = EvalConfig::default();
        assert_eq!(config, EvalConfig::unbounded());
        assert!(config.allows(usize::MAX));
    }

    #[test]
    fn test_capped() {
        let config = EvalConfig::capped(16);
        assert!(config.allows(16));
        assert!(!config.allows(17));
    }
}
