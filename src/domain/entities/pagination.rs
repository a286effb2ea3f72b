use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: PageSize,
}

/// One window of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<I> {
    pub items: Vec<I>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PipelineError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(PipelineError::InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// `max(1, ceil(total_items / page_size))`.
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.page_size)
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> usize {
        self.current_page
            .max(1)
            .saturating_sub(1)
            .saturating_mul(self.page_size.get())
    }

    pub fn clamped(self, total_items: usize) -> Self {
        Self {
            current_page: self.current_page.clamp(1, self.total_pages(total_items)),
            ..self
        }
    }
}

impl<I> Page<I> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based inclusive item positions shown on this page, if any.
    pub fn item_range(&self, page_size: PageSize) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * page_size.get() + 1;
        Some((first, first + self.items.len() - 1))
    }
}
