//! This module defines the common functionality for paging data.
//!
//! Pages are 1-indexed in URLs and in the UI. Both table views share the same
//! arithmetic: a collection of `count` rows is split into pages of `per_page`
//! rows, the current page is always clamped into the valid range, and an
//! empty collection still displays one (empty) page.

use std::ops::Range;

use serde::Deserialize;

/// The config for pagination.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of rows to display per page when not specified in a request.
    pub default_page_size: u64,
    /// The maximum number of page buttons to show in the pagination indicator.
    pub max_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
            max_pages: 5,
        }
    }
}

/// The raw, unvalidated paging query parameters sent by the client.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    /// The requested page number.
    pub page: Option<u64>,
    /// The requested number of rows per page.
    pub per_page: Option<u64>,
}

/// Validated paging parameters after defaults and clamping have been applied.
///
/// This is the source of truth for what a table view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPage {
    /// The current page, in `[1, page_count]`.
    pub page: u64,
    /// The number of rows per page, at least 1.
    pub per_page: u64,
}

impl ResolvedPage {
    /// Build the canonical URL for these paging parameters under `route`.
    pub fn to_url(self, route: &str) -> String {
        format!("{route}?page={}&per_page={}", self.page, self.per_page)
    }
}

/// The number of pages needed to display `count` rows, `per_page` at a time.
///
/// At least one page is always reported, so an empty collection renders as a
/// single empty page rather than no pages at all.
pub fn page_count(count: usize, per_page: u64) -> u64 {
    (count as u64).div_ceil(per_page).max(1)
}

/// Clamp `page` into the valid range `[1, page_count]` for the collection.
///
/// Used whenever the collection shrinks or the page size changes, so the
/// current page always references a page that exists.
pub fn clamp_page(page: u64, count: usize, per_page: u64) -> u64 {
    page.clamp(1, page_count(count, per_page))
}

/// The index range of the rows visible on `page`, clipped to the collection.
///
/// Across all valid pages the returned ranges partition `0..count` exactly
/// once, with no gaps and no overlaps.
pub fn page_slice(count: usize, per_page: u64, page: u64) -> Range<usize> {
    let start = ((page - 1) * per_page).min(count as u64) as usize;
    let end = (start + per_page as usize).min(count);

    start..end
}

/// Apply defaults and clamping to a raw page query.
///
/// Returns the resolved parameters and whether they differ from what the
/// client sent. Callers should redirect to [ResolvedPage::to_url] when they
/// do, so that the address bar always shows the canonical, in-range URL.
pub fn resolve_page_query(
    query: PageQuery,
    count: usize,
    config: &PaginationConfig,
) -> (ResolvedPage, bool) {
    let per_page = query
        .per_page
        .filter(|&per_page| per_page >= 1)
        .unwrap_or(config.default_page_size);
    let page = clamp_page(query.page.unwrap_or(config.default_page), count, per_page);

    let resolved = ResolvedPage { page, per_page };
    let is_canonical = query.page == Some(page) && query.per_page == Some(per_page);

    (resolved, !is_canonical)
}

/// A single control in the pagination indicator.
///
/// Every variant carries the page it navigates to. Controls that would
/// navigate to the current page are rendered disabled, so navigation past
/// either end of the page range is a no-op.
#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    /// Jump to the first page.
    FirstButton,
    /// Go back one page.
    BackButton(u64),
    /// Jump to a specific page.
    Page(u64),
    /// The current page.
    CurrPage(u64),
    /// Go forward one page.
    NextButton(u64),
    /// Jump to the last page.
    LastButton(u64),
}

/// Create the list of pagination controls for the current page.
///
/// At most `max_pages` numbered buttons are shown: all pages when they fit,
/// otherwise a window that anchors to the start for the first pages, to the
/// end for the last pages, and centres on the current page in between.
pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let half_window = max_pages / 2;
    let pages: Vec<PaginationIndicator> = if page_count <= max_pages {
        (1..=page_count).map(map_page).collect()
    } else if curr_page <= half_window + 1 {
        (1..=max_pages).map(map_page).collect()
    } else if curr_page >= page_count - half_window {
        ((page_count - max_pages + 1)..=page_count)
            .map(map_page)
            .collect()
    } else {
        ((curr_page - half_window)..=(curr_page + half_window))
            .map(map_page)
            .collect()
    };

    let mut indicators = vec![
        PaginationIndicator::FirstButton,
        PaginationIndicator::BackButton(curr_page.saturating_sub(1).max(1)),
    ];
    indicators.extend(pages);
    indicators.push(PaginationIndicator::NextButton(
        (curr_page + 1).min(page_count),
    ));
    indicators.push(PaginationIndicator::LastButton(page_count));

    indicators
}


#[cfg(test)]
mod indicator_tests {
    use crate::pagination::{PaginationIndicator, create_pagination_indicators};

    #[test]
    fn shows_all_pages() {
        let max_pages = 5;
        let page_count = 5;
        let curr_page = 1;
        let want = [
            PaginationIndicator::FirstButton,
            PaginationIndicator::BackButton(1),
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::Page(5),
            PaginationIndicator::NextButton(2),
            PaginationIndicator::LastButton(5),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn anchors_window_to_start() {
        let max_pages = 5;
        let page_count = 10;
        let curr_page = 3;
        let want = [
            PaginationIndicator::FirstButton,
            PaginationIndicator::BackButton(2),
            PaginationIndicator::Page(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::CurrPage(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::Page(5),
            PaginationIndicator::NextButton(4),
            PaginationIndicator::LastButton(10),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn anchors_window_to_end() {
        let max_pages = 5;
        let page_count = 10;
        let curr_page = 8;
        let want = [
            PaginationIndicator::FirstButton,
            PaginationIndicator::BackButton(7),
            PaginationIndicator::Page(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::CurrPage(8),
            PaginationIndicator::Page(9),
            PaginationIndicator::Page(10),
            PaginationIndicator::NextButton(9),
            PaginationIndicator::LastButton(10),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn centres_window_on_current_page() {
        let max_pages = 5;
        let page_count = 10;
        let curr_page = 5;
        let want = [
            PaginationIndicator::FirstButton,
            PaginationIndicator::BackButton(4),
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::CurrPage(5),
            PaginationIndicator::Page(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::NextButton(6),
            PaginationIndicator::LastButton(10),
        ];

        let got = create_pagination_indicators(curr_page, page_count, max_pages);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn navigation_clamps_at_bounds() {
        let got = create_pagination_indicators(1, 1, 5);

        // The only page is current, and every navigation button targets it.
        let want = [
            PaginationIndicator::FirstButton,
            PaginationIndicator::BackButton(1),
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::NextButton(1),
            PaginationIndicator::LastButton(1),
        ];
        assert_eq!(want, got.as_slice());
    }
}
