//! Paging primitives
//!
//! A [`PageReq`] arrives from the caller, is normalized (page zero means
//! the first page, out-of-range page sizes fall back to the default), and
//! a [`SourcePaged`] carries one page of rows together with the
//! [`PageModel`] describing where that page sits in the full result.
//!
//! The effective page size is computed per call from the request; there is
//! no shared page-size setting.

use serde::{Deserialize, Serialize};

/// Page size used when the request does not carry a usable one.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Largest page size a request may ask for.
pub const MAX_PER_PAGE: u32 = 200;

/// A paging request.
///
/// Both fields are lenient: `page == 0` is treated as page 1, and a
/// `per_page` outside `1..=MAX_PER_PAGE` (or absent) falls back to
/// [`DEFAULT_PER_PAGE`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageReq {
    /// Requested page number, 1-based.
    #[serde(default)]
    pub page: u32,
    /// Requested page size.
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PageReq {
    /// Request a page with the default page size.
    pub fn new(page: u32) -> Self {
        Self {
            page,
            per_page: None,
        }
    }

    /// Request a page with an explicit page size.
    pub fn with_per_page(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page: Some(per_page),
        }
    }

    /// Effective page number; zero is coerced to the first page.
    pub fn page(&self) -> u32 {
        if self.page == 0 {
            1
        } else {
            self.page
        }
    }

    /// Effective page size; values outside `1..=MAX_PER_PAGE` fall back to
    /// [`DEFAULT_PER_PAGE`].
    pub fn per_page(&self) -> u32 {
        match self.per_page {
            Some(n) if (1..=MAX_PER_PAGE).contains(&n) => n,
            _ => DEFAULT_PER_PAGE,
        }
    }
}

/// Where one page sits inside the full result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageModel {
    pub current_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub per_page: u32,
}

impl PageModel {
    /// Build a page model; `total_pages` is `ceil(total_items / per_page)`.
    pub fn new(total_items: u64, current_page: u32, per_page: u32) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total_items.div_ceil(per_page as u64) as u32
        };
        Self {
            current_page,
            total_items,
            total_pages,
            per_page,
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One page of rows plus its paging metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SourcePaged<T> {
    pub source: Vec<T>,
    pub paging: PageModel,
}

impl<T> SourcePaged<T> {
    /// An empty result with zeroed paging metadata.
    pub fn empty() -> Self {
        Self {
            source: Vec::new(),
            paging: PageModel::new(0, 0, 0),
        }
    }

    /// Wrap an already-sliced page with its metadata.
    pub fn from_parts(source: Vec<T>, paging: PageModel) -> Self {
        Self { source, paging }
    }

    /// Slice one page out of a materialized source, preserving its order.
    ///
    /// # Example
    ///
    /// ```
    /// use layered_repository::paging::{PageReq, SourcePaged};
    ///
    /// let rows: Vec<u32> = (1..=25).collect();
    /// let paged = SourcePaged::paged(rows, &PageReq::with_per_page(2, 10));
    ///
    /// assert_eq!(paged.source, (11..=20).collect::<Vec<u32>>());
    /// assert_eq!(paged.paging.total_pages, 3);
    /// assert!(paged.paging.has_previous_page());
    /// assert!(paged.paging.has_next_page());
    /// ```
    pub fn paged(source: Vec<T>, req: &PageReq) -> Self {
        let page = req.page();
        let per_page = req.per_page();
        let total_items = source.len() as u64;
        let skip = (page as usize - 1).saturating_mul(per_page as usize);
        let source: Vec<T> = source
            .into_iter()
            .skip(skip)
            .take(per_page as usize)
            .collect();
        Self {
            source,
            paging: PageModel::new(total_items, page, per_page),
        }
    }

    /// Convert the page's rows while keeping the paging metadata.
    pub fn map_source<U>(self, f: impl FnMut(T) -> U) -> SourcePaged<U> {
        SourcePaged {
            source: self.source.into_iter().map(f).collect(),
            paging: self.paging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_zero_is_first_page() {
        assert_eq!(PageReq::new(0).page(), 1);
        assert_eq!(PageReq::new(1).page(), 1);
        assert_eq!(PageReq::new(7).page(), 7);
    }

    #[test]
    fn test_per_page_bounds() {
        assert_eq!(PageReq::new(1).per_page(), DEFAULT_PER_PAGE);
        assert_eq!(PageReq::with_per_page(1, 0).per_page(), DEFAULT_PER_PAGE);
        assert_eq!(PageReq::with_per_page(1, 201).per_page(), DEFAULT_PER_PAGE);
        assert_eq!(PageReq::with_per_page(1, 200).per_page(), 200);
        assert_eq!(PageReq::with_per_page(1, 1).per_page(), 1);
    }

    #[test]
    fn test_page_model_ceiling() {
        assert_eq!(PageModel::new(25, 1, 10).total_pages, 3);
        assert_eq!(PageModel::new(20, 1, 10).total_pages, 2);
        assert_eq!(PageModel::new(0, 1, 10).total_pages, 0);
        assert_eq!(PageModel::new(1, 1, 10).total_pages, 1);
    }

    #[test]
    fn test_page_model_navigation_flags() {
        let first = PageModel::new(25, 1, 10);
        assert!(!first.has_previous_page());
        assert!(first.has_next_page());

        let last = PageModel::new(25, 3, 10);
        assert!(last.has_previous_page());
        assert!(!last.has_next_page());
    }

    #[test]
    fn test_paged_slices_in_order() {
        let rows: Vec<u32> = (1..=25).collect();
        let paged = SourcePaged::paged(rows, &PageReq::with_per_page(2, 10));
        assert_eq!(paged.source, (11..=20).collect::<Vec<u32>>());
        assert_eq!(paged.paging.current_page, 2);
        assert_eq!(paged.paging.total_items, 25);
    }

    #[test]
    fn test_paged_past_the_end_is_empty() {
        let rows: Vec<u32> = (1..=5).collect();
        let paged = SourcePaged::paged(rows, &PageReq::with_per_page(4, 10));
        assert!(paged.source.is_empty());
        assert_eq!(paged.paging.total_items, 5);
        assert_eq!(paged.paging.total_pages, 1);
    }
}
