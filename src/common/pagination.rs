use crate::common::error::{AppError, AppResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// A resolved page window: `skip = (page - 1) * limit`, `take = limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip: i64,
    take: i64,
}

impl Pagination {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> AppResult<Self> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 || !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::InvalidPagination);
        }

        // offset must still fit a BIGINT
        let skip = (page - 1)
            .checked_mul(limit)
            .ok_or(AppError::InvalidPagination)?;

        Ok(Self { skip, take: limit })
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn take(&self) -> i64 {
        self.take
    }
}
