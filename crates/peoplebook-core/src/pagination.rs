use serde::{Deserialize, Serialize};

/// Returns the 1-based `page_number` window of `records`, clipped to the
/// available length. Page 0, a zero page size, or a page past the end yield
/// an empty slice.
pub fn page<T>(records: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page_number - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

pub fn has_next(total: usize, page_number: usize, page_size: usize) -> bool {
    page_number
        .checked_mul(page_size)
        .is_some_and(|end| end < total)
}

pub fn has_prev(page_number: usize) -> bool {
    page_number > 1
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow<T> {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub page_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub items: Vec<T>,
}

impl<T: Clone> PageWindow<T> {
    pub fn from_slice(records: &[T], page_number: usize, page_size: usize) -> Self {
        let total = records.len();
        Self {
            page: page_number,
            page_size,
            total,
            page_count: page_count(total, page_size),
            has_prev: has_prev(page_number),
            has_next: has_next(total, page_number, page_size),
            items: page(records, page_number, page_size).to_vec(),
        }
    }
}

impl<T> PageWindow<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageWindow<U> {
        PageWindow {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            page_count: self.page_count,
            has_prev: self.has_prev,
            has_next: self.has_next,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
