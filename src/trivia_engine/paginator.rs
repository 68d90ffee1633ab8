/// Turn an optional, possibly non-positive page number into a 1-based page.
pub fn normalize_page(page: Option<i64>) -> usize {
    match page {
        Some(p) if p > 1 => usize::try_from(p).unwrap_or(usize::MAX),
        _ => 1,
    }
}

/// Slice `items` into the `page`-th chunk of `page_size`.
///
/// `page` is 1-based and already normalised. Out-of-range pages yield an
/// empty vector; callers decide whether that is an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}
