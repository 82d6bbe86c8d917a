use serde::Serialize;
use utoipa::ToSchema;

pub const CERTIFICATIONS_PER_PAGE: usize = 4;
pub const ACHIEVEMENTS_PER_PAGE: usize = 6;

/// Zero-based page cursor over a list of known length.
///
/// A page beyond the last one resets to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pager {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl Pager {
    pub fn new(requested_page: usize, per_page: usize, total_items: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(per_page);
        let page = if requested_page >= total_pages {
            0
        } else {
            requested_page
        };

        Self {
            page,
            per_page,
            total_items,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Controls are hidden when everything fits on one page.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn next(self) -> Self {
        Self::new(
            (self.page + 1).min(self.total_pages.saturating_sub(1)),
            self.per_page,
            self.total_items,
        )
    }

    pub fn previous(self) -> Self {
        Self::new(self.page.saturating_sub(1), self.per_page, self.total_items)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page * self.per_page).min(items.len());
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }
}
