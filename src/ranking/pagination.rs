use crate::config::ServerSettings;
use crate::errors::{SppError, SppResult};

use super::filter::{parse_number, FilterParams};

/// Window over a ranked sequence; ranks are assigned before slicing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// `pageSize` wins over `limit`; oversized pages are clamped to the configured maximum
    pub fn from_params(params: &FilterParams, settings: &ServerSettings) -> SppResult<Self> {
        let page = parse_number::<usize>("page", &params.page)?.unwrap_or(1);
        if page == 0 {
            return Err(SppError::InvalidFilter("`page` starts at 1".to_string()));
        }

        let requested = match parse_number::<usize>("pageSize", &params.page_size)? {
            Some(size) => Some(size),
            None => parse_number::<usize>("limit", &params.limit)?,
        };
        let page_size = match requested {
            Some(0) => {
                return Err(SppError::InvalidFilter(
                    "page size must be at least 1".to_string(),
                ))
            }
            Some(size) => size.min(settings.max_page_size),
            None => settings.default_page_size,
        };

        Ok(Self::new(page, page_size))
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.page_size)
            .collect()
    }
}
