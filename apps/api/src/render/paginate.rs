//! Greedy fixed-height pagination.
//!
//! The full raster image is placed once per page at a decreasing vertical
//! offset; each page shows the slice that falls inside its viewport. This is
//! a raw height cutoff — no widow/orphan control and no reflow across pages.
//! The loop shape (including the trailing page produced by content exactly
//! one page tall) is load-bearing behavior and pinned by tests.

use crate::render::PagePlacement;

/// Plans page placements for a scaled image of `image_height` against a fixed
/// `page_height`. The first page draws the image at offset 0; each following
/// page draws it at `height_left - image_height` (negative) while any
/// unplaced height remains.
pub fn plan_pages(image_height: f32, page_height: f32) -> Vec<PagePlacement> {
    let mut placements = vec![PagePlacement { offset_y: 0.0 }];
    let mut height_left = image_height - page_height;

    while height_left >= 0.0 {
        placements.push(PagePlacement {
            offset_y: height_left - image_height,
        });
        height_left -= page_height;
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_is_one_page() {
        let placements = plan_pages(500.0, 842.0);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].offset_y, 0.0);
    }

    #[test]
    fn test_overflowing_content_adds_a_page() {
        let placements = plan_pages(1000.0, 842.0);
        assert_eq!(placements.len(), 2);
        // second page pulls the image up by the already-shown remainder
        assert!((placements[1].offset_y - (158.0 - 1000.0)).abs() < 1e-3);
    }

    #[test]
    fn test_exact_fit_still_yields_trailing_page() {
        // height_left == 0 enters the loop once
        let placements = plan_pages(842.0, 842.0);
        assert_eq!(placements.len(), 2);
    }

    #[test]
    fn test_three_page_document() {
        let placements = plan_pages(2000.0, 842.0);
        assert_eq!(placements.len(), 3);
        // offsets strictly decrease
        assert!(placements[1].offset_y > placements[2].offset_y);
        assert!(placements.iter().skip(1).all(|p| p.offset_y < 0.0));
    }

    #[test]
    fn test_zero_height_is_one_page() {
        assert_eq!(plan_pages(0.0, 842.0).len(), 1);
    }
}
