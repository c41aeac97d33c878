//! Pagination window parsed from the `range` query parameter.

use crate::error::AppError;

/// Page size used when the client does not send a range.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page a client may request.
pub const MAX_LIMIT: i64 = 100;

/// An `offset`/`limit` window over an ordered result set.
///
/// Always holds `offset >= 0` and `1 <= limit <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: i64,
    pub limit: i64,
}

impl Pagination {
    /// Builds a window, clamping out-of-range values.
    ///
    /// A non-positive `limit` falls back to [`DEFAULT_LIMIT`], a larger one is
    /// capped at [`MAX_LIMIT`], and a negative `offset` becomes 0.
    pub fn new(offset: i64, limit: i64) -> Self {
        let limit = if limit <= 0 {
            DEFAULT_LIMIT
        } else {
            limit.min(MAX_LIMIT)
        };

        Self {
            offset: offset.max(0),
            limit,
        }
    }

    /// Parses `[<offset>,<limit>]`, or the default window for an empty string.
    ///
    /// Whitespace around each number is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRange`] for missing brackets, a field count
    /// other than two, non-integer fields, a negative offset or a non-positive
    /// limit.
    pub fn parse_range(range: &str) -> Result<Self, AppError> {
        if range.is_empty() {
            return Ok(Self::default());
        }

        let inner = range
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or(AppError::InvalidRange)?;

        let mut parts = inner.split(',');
        let (Some(offset), Some(limit), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(AppError::InvalidRange);
        };

        let offset: i64 = offset.trim().parse().map_err(|_| AppError::InvalidRange)?;
        let limit: i64 = limit.trim().parse().map_err(|_| AppError::InvalidRange)?;

        if offset < 0 || limit <= 0 {
            return Err(AppError::InvalidRange);
        }

        Ok(Self::new(offset, limit))
    }

    /// Renders the `Content-Range` header for a result set of `total` rows.
    ///
    /// `links 0-0/0` when empty, otherwise `links <offset>-<last>/<total>` where
    /// `last` never exceeds `total - 1`.
    pub fn content_range(&self, total: i64) -> String {
        if total <= 0 {
            return "links 0-0/0".to_string();
        }

        let last = self.offset.saturating_add(self.limit - 1).min(total - 1);
        format!("links {}-{}/{}", self.offset, last, total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_is_default() {
        let p = Pagination::parse_range("").unwrap();
        assert_eq!(p, Pagination { offset: 0, limit: 10 });
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            Pagination::parse_range("[10,5]").unwrap(),
            Pagination { offset: 10, limit: 5 }
        );
        assert_eq!(
            Pagination::parse_range(" [ 3 , 25 ] ").unwrap(),
            Pagination { offset: 3, limit: 25 }
        );
    }

    #[test]
    fn test_parse_range_clamps_limit() {
        assert_eq!(Pagination::parse_range("[0,500]").unwrap().limit, MAX_LIMIT);
    }

    #[test]
    fn test_parse_range_matches_new() {
        for (o, l) in [(0, 1), (5, 10), (50, 100), (7, 250)] {
            let parsed = Pagination::parse_range(&format!("[{o},{l}]")).unwrap();
            assert_eq!(parsed, Pagination::new(o, l));
        }
    }

    #[test]
    fn test_parse_range_errors() {
        for input in [
            "0,10", "[0,10", "0,10]", "[0]", "[0,10,20]", "[a,10]", "[0,b]", "[-1,10]", "[0,0]",
            "[0,-5]", "[]", " ",
        ] {
            assert!(
                matches!(Pagination::parse_range(input), Err(AppError::InvalidRange)),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(Pagination::new(-4, 0), Pagination { offset: 0, limit: 10 });
        assert_eq!(Pagination::new(2, 1000), Pagination { offset: 2, limit: 100 });
    }

    #[test]
    fn test_content_range_empty() {
        assert_eq!(Pagination::default().content_range(0), "links 0-0/0");
    }

    #[test]
    fn test_content_range_window() {
        assert_eq!(Pagination::new(10, 5).content_range(25), "links 10-14/25");
        assert_eq!(Pagination::new(0, 10).content_range(1), "links 0-0/1");
        assert_eq!(Pagination::new(20, 10).content_range(25), "links 20-24/25");
    }

    #[test]
    fn test_content_range_offset_near_max() {
        let p = Pagination::parse_range(&format!("[{},10]", i64::MAX)).unwrap();
        assert_eq!(p.offset, i64::MAX);
        assert_eq!(
            p.content_range(1),
            format!("links {}-0/1", i64::MAX)
        );
        assert_eq!(
            Pagination::new(i64::MAX - 3, 100).content_range(i64::MAX),
            format!("links {}-{}/{}", i64::MAX - 3, i64::MAX - 1, i64::MAX)
        );
    }
}
