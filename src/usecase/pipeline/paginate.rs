use crate::domain::entities::pagination::{Page, PaginationState};

/// Cuts the window `[(page - 1) * size, page * size)` out of `items`.
///
/// The state is taken as given: a page past the end yields an empty window
/// and the caller clamps on its next update.
pub fn paginate<I: Clone>(items: &[I], state: PaginationState) -> Page<I> {
    let total_items = items.len();
    let start = state.offset().min(total_items);
    let end = start.saturating_add(state.page_size.get()).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        current_page: state.current_page.max(1),
        total_pages: state.total_pages(total_items),
        total_items,
    }
}
