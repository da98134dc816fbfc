//! Pagination label generation
//!
//! Pure function that compresses a page-number sequence into at most seven
//! display tokens, eliding the middle with ellipsis markers.

/// One slot in the rendered pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

/// Window of neighbors kept around the current page before eliding
const MAX_VISIBLE: u32 = 5;

/// Generate the token sequence for a pagination bar
///
/// # Rules
/// - `total_pages <= 5`: every page in order, no ellipsis
/// - near the start (`current_page <= 3`): `1 2 3 4 … last`
/// - near the end (`current_page >= total_pages - 2`): `1 … last-3 .. last`
/// - otherwise: `1 … current-1 current current+1 … last`
///
/// Defined for every pair with `current_page >= 1` and `total_pages >= 1`.
pub fn page_tokens(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    let mut tokens = Vec::new();

    if total_pages <= MAX_VISIBLE {
        for page in 1..=total_pages {
            tokens.push(PageToken::Page(page));
        }
    } else if current_page <= 3 {
        for page in 1..=4 {
            tokens.push(PageToken::Page(page));
        }
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        for page in (total_pages - 3)..=total_pages {
            tokens.push(PageToken::Page(page));
        }
    } else {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        for page in (current_page - 1)..=(current_page + 1) {
            tokens.push(PageToken::Page(page));
        }
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    }

    tokens
}
