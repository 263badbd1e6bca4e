pub const DEFAULT_OFFSET: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 10;

/// Offset/limit window over a collection ordered by a stable key.
///
/// No upper bound is applied to `limit`; callers asking for huge windows
/// get what the store can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            offset: offset.unwrap_or(DEFAULT_OFFSET),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// A bounded window of results plus the size of the whole collection.
///
/// `total` is read separately from `results`, so under concurrent writes the
/// two may describe slightly different moments.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            results,
            total,
            offset: request.offset,
            limit: request.limit,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_defaults_when_params_missing() {
        let request = PageRequest::new(None, None);
        assert_eq!(request.offset, 0);
        assert_eq!(request.limit, 10);
    }

    #[test]
    fn should_keep_metadata_when_mapping_page() {
        let page = Page::new(vec![1, 2], 5, PageRequest::new(Some(2), Some(2)));
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.results, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.total, 5);
        assert_eq!(mapped.offset, 2);
        assert_eq!(mapped.limit, 2);
    }
}
