pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Effective page request, both values at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One slice of a larger sequence plus the metadata describing it
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of items in this page
    pub count: usize,
    /// Number of items before slicing
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Integer at the start of `raw`, ignoring whatever follows it.
///
/// `"2.5"` reads as 2 and `"10abc"` as 10; text without leading digits has
/// no value. Magnitudes beyond `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(leading_integer) {
        Some(value) => usize::try_from(value.max(1)).unwrap_or(usize::MAX),
        None => default,
    }
}

impl Pagination {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Values are read up to the first non-digit. Missing values or values
    /// without leading digits fall back to the defaults; integers below 1
    /// are clamped to 1.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(parse_or(page, DEFAULT_PAGE), parse_or(limit, DEFAULT_LIMIT))
    }

    /// Slice `[(page - 1) * limit, page * limit)` clipped to the input.
    ///
    /// A page past the end is empty, not an error.
    pub fn paginate<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let start = (self.page - 1).saturating_mul(self.limit);

        let slice: Vec<T> = items.into_iter().skip(start).take(self.limit).collect();

        Page {
            count: slice.len(),
            items: slice,
            total,
            page: self.page,
            limit: self.limit,
            total_pages: total.div_ceil(self.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_when_absent_or_invalid() {
        assert_eq!(Pagination::from_query(None, None), Pagination::default());
        assert_eq!(
            Pagination::from_query(Some("abc"), Some("x10")),
            Pagination::new(1, 10)
        );
        assert_eq!(
            Pagination::from_query(Some(""), Some("")),
            Pagination::default()
        );
    }

    #[test]
    fn test_leading_integer_prefix_is_used() {
        assert_eq!(
            Pagination::from_query(Some("2.5"), Some("10abc")),
            Pagination::new(2, 10)
        );
        assert_eq!(
            Pagination::from_query(Some(" 3 "), Some("+4px")),
            Pagination::new(3, 4)
        );
    }

    #[test]
    fn test_values_below_one_are_clamped() {
        assert_eq!(
            Pagination::from_query(Some("0"), Some("-5")),
            Pagination::new(1, 1)
        );
    }

    #[test]
    fn test_second_page() {
        let page = Pagination::from_query(Some("2"), Some("2")).paginate(vec![1, 2, 3]);
        assert_eq!(page.items, vec![3]);
        assert_eq!(page.count, 1);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = Pagination::new(99, 10).paginate(vec![1, 2, 3]);
        assert!(page.items.is_empty());
        assert_eq!(page.count, 0);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_empty_input_has_zero_pages() {
        let page = Pagination::default().paginate(Vec::<u8>::new());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = Pagination::from_query(Some("9223372036854775807"), Some("1000"))
            .paginate(vec![1, 2, 3]);
        assert!(page.items.is_empty());

        let saturated = Pagination::from_query(Some("99999999999999999999999"), None);
        assert_eq!(saturated.page, usize::try_from(i64::MAX).unwrap());
    }

    proptest! {
        #[test]
        fn page_metadata_is_consistent(
            len in 0usize..200,
            page in 1usize..30,
            limit in 1usize..30,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let result = Pagination::new(page, limit).paginate(items);

            prop_assert!(result.count <= limit);
            prop_assert_eq!(result.count, result.items.len());
            prop_assert_eq!(result.total, len);
            prop_assert_eq!(result.total_pages, len.div_ceil(limit));
            if let Some(first) = result.items.first() {
                prop_assert_eq!(*first, (page - 1) * limit);
            }
        }

        #[test]
        fn pages_partition_the_input(len in 0usize..100, limit in 1usize..15) {
            let items: Vec<usize> = (0..len).collect();
            let pages = len.div_ceil(limit);
            let rejoined: Vec<usize> = (1..=pages)
                .flat_map(|p| Pagination::new(p, limit).paginate(items.clone()).items)
                .collect();
            prop_assert_eq!(rejoined, items);
        }
    }
}
