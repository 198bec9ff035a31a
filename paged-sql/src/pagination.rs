//! Page size resolution and offset arithmetic.

use crate::error::BuildError;
use crate::policy::Policy;
use crate::request::Request;

/// Resolve the effective page size and row offset for a request.
///
/// Pages are 1-based; page zero is an error, never clamped. The requested
/// page size is used when it fits within the policy maximum, clamped to
/// the maximum when it exceeds it, and replaced by the policy default when
/// zero. The offset is computed in `u64` so the largest page number and
/// page size cannot overflow.
pub(crate) fn resolve_page(policy: &Policy, request: &Request) -> Result<(u16, u64), BuildError> {
    if request.page == 0 {
        return Err(BuildError::InvalidPage { page: request.page });
    }

    let size = if request.page_size == 0 {
        policy.default_page_size
    } else if request.page_size > policy.max_page_size {
        policy.max_page_size
    } else {
        request.page_size
    };
    // A default above the maximum is a policy author mistake; the
    // effective size still has to respect the cap.
    let size = size.min(policy.max_page_size);

    let offset = u64::from(size) * (u64::from(request.page) - 1);
    Ok((size, offset))
}

/// Page metadata for a response, derived from the returned row count.
///
/// # Example
///
/// ```
/// use paged_sql::PageInfo;
///
/// let info = PageInfo::new(3, 3).for_page(2).with_total(7);
/// assert!(info.has_next);
/// assert!(info.has_prev);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Whether a further page may exist.
    pub has_next: bool,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Total row count, if the caller computed one.
    pub total: Option<u64>,
}

impl PageInfo {
    /// Create page info from the returned count vs the effective limit.
    ///
    /// If `count >= limit`, assumes there are more rows.
    #[must_use]
    pub fn new(count: usize, limit: u16) -> Self {
        Self {
            has_next: count >= usize::from(limit),
            has_prev: false,
            total: None,
        }
    }

    /// Derive `has_prev` from the 1-based page number.
    #[must_use]
    pub fn for_page(mut self, page: u32) -> Self {
        self.has_prev = page > 1;
        self
    }

    /// Set the total row count.
    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_zero_is_an_error() {
        let request = Request::new().page(0);
        assert_eq!(
            resolve_page(&Policy::new(), &request),
            Err(BuildError::InvalidPage { page: 0 })
        );
    }

    #[test]
    fn test_default_size_when_request_is_zero() {
        let policy = Policy::new().default_page_size(3);
        let request = Request::new().page(1);
        assert_eq!(resolve_page(&policy, &request), Ok((3, 0)));
    }

    #[test]
    fn test_requested_size_within_bounds() {
        let policy = Policy::new().max_page_size(100);
        let request = Request::new().page_size(10).page(4);
        assert_eq!(resolve_page(&policy, &request), Ok((10, 30)));
    }

    #[test]
    fn test_oversized_request_clamps_to_max() {
        let policy = Policy::new().max_page_size(100);
        let request = Request::new().page_size(1000).page(1);
        assert_eq!(resolve_page(&policy, &request), Ok((100, 0)));
    }

    #[test]
    fn test_default_above_max_is_capped() {
        let policy = Policy::new().default_page_size(500).max_page_size(100);
        let request = Request::new().page(2);
        assert_eq!(resolve_page(&policy, &request), Ok((100, 100)));
    }

    #[test]
    fn test_offset_does_not_overflow() {
        let policy = Policy::new()
            .default_page_size(u16::MAX)
            .max_page_size(u16::MAX);
        let request = Request::new().page(u32::MAX);
        let (size, offset) = resolve_page(&policy, &request).unwrap();
        assert_eq!(size, u16::MAX);
        assert_eq!(offset, u64::from(u16::MAX) * (u64::from(u32::MAX) - 1));
    }

    #[test]
    fn test_page_info() {
        let info = PageInfo::new(20, 20);
        assert!(info.has_next);
        assert!(!info.has_prev);

        let info = PageInfo::new(15, 20).for_page(3).with_total(55);
        assert!(!info.has_next);
        assert!(info.has_prev);
        assert_eq!(info.total, Some(55));
    }
}
