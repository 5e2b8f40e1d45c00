//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference string.
///
/// A reference string is an ordered sequence of these; frames hold at most
/// one each. Using `u32` matches the usual `page_id_t` convention and is
/// plenty for any workload a simulation would be fed.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(7);
/// assert_eq!(page.0, 7);
/// assert_eq!(format!("{}", page), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bare number: timelines and logs print many of these per row.
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_equality() {
        assert_eq!(PageId::new(5), PageId::new(5));
        assert_ne!(PageId::new(5), PageId::new(6));
    }

    #[test]
    fn test_page_id_from_u32() {
        let pid: PageId = 9u32.into();
        assert_eq!(pid, PageId::new(9));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
    }
}
