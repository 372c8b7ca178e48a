//! Offset pagination over an instrument dataset
//!
//! Pure slicing logic: a requested page index and size become a bounded
//! `[start, end)` window over the dataset plus descriptive metadata. Inputs
//! are caller-supplied and untrusted, so out-of-range pages clamp instead of
//! failing.

use serde::Serialize;

use crate::data::{Dataset, Record};

/// One page of instrument records with position metadata
///
/// Serialized with camelCase keys to match the paginated JSON shape consumers
/// expect (`totalElements`, `numberOfElements`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Records in `[start, end)` of the source dataset
    pub content: Vec<Record>,
    /// Normalized zero-based page index
    pub page: usize,
    /// Effective page size (requested size clamped to at least 1)
    pub size: usize,
    /// Total records in the dataset
    pub total_elements: usize,
    /// Total page count at this size (0 for an empty dataset)
    pub total_pages: usize,
    /// Whether this is the first page
    pub first: bool,
    /// Whether this is the last page
    pub last: bool,
    /// Records actually returned in `content`
    pub number_of_elements: usize,
}

/// Computes one page of the dataset
///
/// Normalization rules:
/// * `size < 1` is clamped to 1
/// * `page < 0` is clamped to 0
/// * `page` past the end is clamped to the last page, when one exists
///
/// Deterministic and side-effect free for a given dataset snapshot; the slice
/// never exceeds `size` records.
pub fn paginate(dataset: &Dataset, page: i64, size: i64) -> Page {
    let size = size.max(1) as usize;
    let total_elements = dataset.len();
    let total_pages = total_elements.div_ceil(size);

    let mut page = page.max(0) as usize;
    if total_pages == 0 {
        page = 0;
    } else if page >= total_pages {
        page = total_pages - 1;
    }

    let start = page * size;
    let end = (start + size).min(total_elements);
    let content: Vec<Record> = if start < total_elements {
        dataset.records()[start..end].to_vec()
    } else {
        Vec::new()
    };

    let number_of_elements = content.len();
    Page {
        content,
        page,
        size,
        total_elements,
        total_pages,
        first: page == 0,
        last: page + 1 >= total_pages,
        number_of_elements,
    }
}
