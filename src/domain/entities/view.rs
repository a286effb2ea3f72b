use std::collections::BTreeSet;

use crate::domain::entities::criteria::{DateSelector, FilterCriteria, NumericRange};
use crate::domain::entities::pagination::{PageSize, PaginationState};
use crate::domain::entities::sort::SortConfig;

/// Filter, sort and page state owned by one table view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<F> {
    pub criteria: FilterCriteria<F>,
    /// Criteria the view opened with; `ClearFilters` returns to them.
    pub defaults: FilterCriteria<F>,
    pub sort: Option<SortConfig<F>>,
    pub pagination: PaginationState,
}

/// User interactions that move a [`ViewState`] forward.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction<F> {
    SetSearch(String),
    SetCategories { field: F, selected: BTreeSet<String> },
    SetNumericRange { field: F, range: NumericRange },
    SetDate { field: F, selector: DateSelector },
    ClearFilters,
    ToggleSort(F),
    SetSort(Option<SortConfig<F>>),
    SetPage(usize),
    SetPageSize(PageSize),
}

impl<F> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            defaults: FilterCriteria::default(),
            sort: None,
            pagination: PaginationState::default(),
        }
    }
}

impl<F: Copy + PartialEq> ViewState<F> {
    pub fn new(criteria: FilterCriteria<F>, page_size: PageSize) -> Self {
        Self {
            defaults: criteria.clone(),
            criteria,
            sort: None,
            pagination: PaginationState::new(page_size),
        }
    }

    pub fn with_sort(mut self, sort: SortConfig<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Applies one interaction. Filter and page-size changes go back to page 1;
    /// sorting keeps the current page.
    pub fn reduce(mut self, action: ViewAction<F>) -> Self {
        match action {
            ViewAction::SetSearch(query) => {
                self.criteria.set_search(query);
                self.pagination.current_page = 1;
            }
            ViewAction::SetCategories { field, selected } => {
                self.criteria.set_categories(field, selected);
                self.pagination.current_page = 1;
            }
            ViewAction::SetNumericRange { field, range } => {
                self.criteria.set_numeric(field, range);
                self.pagination.current_page = 1;
            }
            ViewAction::SetDate { field, selector } => {
                self.criteria.set_date(field, selector);
                self.pagination.current_page = 1;
            }
            ViewAction::ClearFilters => {
                self.criteria = self.defaults.clone();
                self.pagination.current_page = 1;
            }
            ViewAction::ToggleSort(key) => {
                self.sort = Some(SortConfig::toggle(self.sort, key));
            }
            ViewAction::SetSort(sort) => {
                self.sort = sort;
            }
            ViewAction::SetPage(page) => {
                self.pagination.current_page = page.max(1);
            }
            ViewAction::SetPageSize(page_size) => {
                self.pagination = PaginationState::new(page_size);
            }
        }
        self
    }

    /// Pulls the current page back into `[1, total_pages]` for `total_items`.
    pub fn clamp_page(mut self, total_items: usize) -> Self {
        self.pagination = self.pagination.clamped(total_items);
        self
    }
}
