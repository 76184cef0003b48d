/// The 1-indexed page `page_number` of `items`, `page_size` items per page.
///
/// The last page is clipped to what is available. Pages past the end, page 0
/// and a zero page size all yield an empty slice.
pub fn paginate<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let start = match (page_number - 1).checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
