//! Zero-based paging shared by every repository.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` (any case) sorts descending; anything else ascends.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Query-string form of a page request: `?page=0&size=12&direction=asc`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub direction: Option<String>,
}

impl PageQuery {
    pub fn into_pageable(self) -> Pageable {
        Pageable::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            self.direction
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
        )
    }
}

/// Page number (zero-based), page size and sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    pub page: u32,
    pub size: u32,
    pub direction: SortDirection,
}

impl Pageable {
    /// Size is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, size: u32, direction: SortDirection) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            direction,
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, SortDirection::Asc)
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub pageable: Pageable,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: Pageable, total_elements: u64) -> Self {
        Self {
            content,
            pageable,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.pageable.size))
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            pageable: self.pageable,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults() {
        let pageable = PageQuery::default().into_pageable();
        assert_eq!(pageable.page, 0);
        assert_eq!(pageable.size, 12);
        assert_eq!(pageable.direction, SortDirection::Asc);
        assert_eq!(pageable.offset(), 0);
    }

    #[test]
    fn direction_is_case_insensitive() {
        assert_eq!(SortDirection::parse("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::parse("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Asc);
    }

    #[test]
    fn size_is_clamped_and_offset_computed() {
        let pageable = Pageable::new(3, 0, SortDirection::Asc);
        assert_eq!(pageable.size, 1);
        assert_eq!(pageable.offset(), 3);

        let pageable = Pageable::new(2, 5000, SortDirection::Desc);
        assert_eq!(pageable.size, MAX_PAGE_SIZE);
        assert_eq!(pageable.offset(), 2000);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2], Pageable::new(0, 2, SortDirection::Asc), 5);
        assert_eq!(page.total_pages(), 3);

        let empty: Page<i32> = Page::new(vec![], Pageable::default(), 0);
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn map_keeps_totals() {
        let page = Page::new(vec![1, 2, 3], Pageable::default(), 30).map(|x| x * 10);
        assert_eq!(page.content, vec![10, 20, 30]);
        assert_eq!(page.total_elements, 30);
    }
}
