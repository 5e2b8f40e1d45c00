//! Replacement policy selector.
//!
//! The policy set is a closed enumeration: the engine, aggregator, and
//! analyzer all dispatch on [`Policy`], so adding a policy means adding one
//! variant here and one victim-selection arm in the engine, nothing else.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};

/// A page-replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-in, first-out: evict frames in a fixed rotation, ignoring hits.
    Fifo,
    /// Least-recently-used: evict the frame untouched for the longest time.
    Lru,
    /// Belady's optimal: evict the page whose next use is farthest away.
    ///
    /// Requires the full future reference string, so it is an offline
    /// baseline rather than something a real kernel could run.
    Optimal,
}

impl Policy {
    /// Every policy, in the fixed evaluation order used by comparisons.
    ///
    /// Comparison ties are broken by position in this slice.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Human-readable policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Parse a policy selector, case-insensitively.
    ///
    /// # Example
    /// ```
    /// use pagesim::Policy;
    ///
    /// assert_eq!("fifo".parse::<Policy>().unwrap(), Policy::Fifo);
    /// assert!("clock".parse::<Policy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" => Ok(Policy::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_is_fixed() {
        assert_eq!(
            Policy::ALL,
            [Policy::Fifo, Policy::Lru, Policy::Optimal]
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Policy::Fifo.to_string(), "FIFO");
        assert_eq!(Policy::Lru.to_string(), "LRU");
        assert_eq!(Policy::Optimal.to_string(), "Optimal");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("FIFO".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("Lru".parse::<Policy>().unwrap(), Policy::Lru);
        assert_eq!(" optimal ".parse::<Policy>().unwrap(), Policy::Optimal);
    }

    #[test]
    fn test_parse_unknown_policy() {
        let err = "NRU".parse::<Policy>().unwrap_err();
        assert_eq!(err, Error::UnknownPolicy("NRU".to_string()));
    }
}
