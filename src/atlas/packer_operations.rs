//! Shelf Packer Operations - Pure DOP Functions
//!
//! Greedy single pass shelf packing. A placement is never moved once made,
//! so the layout depends only on the order of requests.

use super::packer_data::{AtlasRect, ShelfPackerData};

/// Create packer state for an empty page
pub fn create_shelf_packer(page_width: u32, page_height: u32) -> ShelfPackerData {
    ShelfPackerData {
        page_width,
        page_height,
        shelf_y: 0,
        shelf_height: 0,
        cursor_x: 0,
        used_area: 0,
        placed_count: 0,
    }
}

/// Find a spot for a `width` x `height` rectangle and reserve it
///
/// Returns `None` when the page has no room left. A rejected request leaves
/// the packer untouched.
pub fn try_place(data: &mut ShelfPackerData, width: u32, height: u32) -> Option<AtlasRect> {
    if width == 0 || height == 0 || width > data.page_width || height > data.page_height {
        return None;
    }

    // Try to add to current shelf
    let fits_row = data.cursor_x as u64 + width as u64 <= data.page_width as u64;
    let fits_column = data.shelf_y as u64 + height as u64 <= data.page_height as u64;
    if fits_row && fits_column {
        let rect = AtlasRect {
            x: data.cursor_x,
            y: data.shelf_y,
            width,
            height,
        };
        data.cursor_x += width;
        data.shelf_height = data.shelf_height.max(height);
        return Some(commit(data, rect));
    }

    // Start new shelf
    let next_y = data.shelf_y as u64 + data.shelf_height as u64;
    if next_y + height as u64 <= data.page_height as u64 {
        let rect = AtlasRect {
            x: 0,
            y: next_y as u32,
            width,
            height,
        };
        data.shelf_y = rect.y;
        data.shelf_height = height;
        data.cursor_x = width;
        return Some(commit(data, rect));
    }

    // Page is full
    None
}

fn commit(data: &mut ShelfPackerData, rect: AtlasRect) -> AtlasRect {
    data.used_area += rect.width as u64 * rect.height as u64;
    data.placed_count += 1;
    rect
}

/// Get page utilization percentage
pub fn utilization(data: &ShelfPackerData) -> f32 {
    let total_area = data.page_width as u64 * data.page_height as u64;
    if total_area == 0 {
        return 0.0;
    }
    (data.used_area as f64 / total_area as f64 * 100.0) as f32
}

/// Whether two rectangles share any pixel
pub fn rects_overlap(a: &AtlasRect, b: &AtlasRect) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

/// Whether a rectangle lies fully inside a page
pub fn rect_within(rect: &AtlasRect, page_width: u32, page_height: u32) -> bool {
    rect.x as u64 + rect.width as u64 <= page_width as u64
        && rect.y as u64 + rect.height as u64 <= page_height as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_requests(seed: u64, count: usize, max: u32) -> Vec<(u32, u32)> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| (rng.gen_range(1..=max), rng.gen_range(1..=max)))
            .collect()
    }

    fn place_all(page: u32, requests: &[(u32, u32)]) -> Vec<Option<AtlasRect>> {
        let mut packer = create_shelf_packer(page, page);
        requests
            .iter()
            .map(|&(w, h)| try_place(&mut packer, w, h))
            .collect()
    }

    #[test]
    fn test_first_shelf_left_to_right() {
        let mut packer = create_shelf_packer(4, 4);
        assert_eq!(
            try_place(&mut packer, 2, 2),
            Some(AtlasRect { x: 0, y: 0, width: 2, height: 2 })
        );
        assert_eq!(
            try_place(&mut packer, 2, 2),
            Some(AtlasRect { x: 2, y: 0, width: 2, height: 2 })
        );
        // No room on the current shelf and no room below it
        assert_eq!(try_place(&mut packer, 3, 3), None);
        assert_eq!(packer.placed_count, 2);
    }

    #[test]
    fn test_new_shelf_below_tallest() {
        let mut packer = create_shelf_packer(8, 8);
        try_place(&mut packer, 3, 2);
        try_place(&mut packer, 3, 4);
        let rect = try_place(&mut packer, 3, 1).expect("expected a new shelf");
        assert_eq!(rect, AtlasRect { x: 0, y: 4, width: 3, height: 1 });

        let rect = try_place(&mut packer, 5, 2).expect("expected room on shelf");
        assert_eq!(rect, AtlasRect { x: 3, y: 4, width: 5, height: 2 });
    }

    #[test]
    fn test_rejection_keeps_state() {
        let mut packer = create_shelf_packer(4, 4);
        try_place(&mut packer, 2, 2);
        let before = packer.clone();
        assert_eq!(try_place(&mut packer, 3, 3), None);
        assert_eq!(packer.cursor_x, before.cursor_x);
        assert_eq!(packer.shelf_y, before.shelf_y);
        assert_eq!(packer.shelf_height, before.shelf_height);

        // A smaller request still fits the current shelf
        assert_eq!(
            try_place(&mut packer, 1, 1),
            Some(AtlasRect { x: 2, y: 0, width: 1, height: 1 })
        );
    }

    #[test]
    fn test_rejects_zero_and_oversized() {
        let mut packer = create_shelf_packer(16, 16);
        assert_eq!(try_place(&mut packer, 0, 4), None);
        assert_eq!(try_place(&mut packer, 4, 0), None);
        assert_eq!(try_place(&mut packer, 17, 1), None);
        assert_eq!(try_place(&mut packer, 1, 17), None);
        assert_eq!(packer.placed_count, 0);

        for (w, h) in random_requests(7, 200, 64) {
            if w > 16 || h > 16 {
                assert_eq!(try_place(&mut packer, w, h), None);
            }
        }
    }

    #[test]
    fn test_full_page_request_fits_only_empty_page() {
        let mut packer = create_shelf_packer(32, 32);
        assert_eq!(
            try_place(&mut packer, 32, 32),
            Some(AtlasRect { x: 0, y: 0, width: 32, height: 32 })
        );
        assert_eq!(try_place(&mut packer, 1, 1), None);
        assert!((utilization(&packer) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_no_overlap_random_sequences() {
        for seed in 0..20 {
            let requests = random_requests(seed, 300, 40);
            let placed: Vec<AtlasRect> = place_all(128, &requests).into_iter().flatten().collect();
            assert!(!placed.is_empty());

            for (i, a) in placed.iter().enumerate() {
                assert!(rect_within(a, 128, 128), "{:?} out of bounds", a);
                for b in &placed[i + 1..] {
                    assert!(!rects_overlap(a, b), "seed {}: {:?} overlaps {:?}", seed, a, b);
                }
            }
        }
    }

    #[test]
    fn test_deterministic_layout() {
        let requests = random_requests(42, 500, 50);
        let first = place_all(256, &requests);
        for _ in 0..5 {
            assert_eq!(place_all(256, &requests), first);
        }
    }

    #[test]
    fn test_utilization() {
        let mut packer = create_shelf_packer(10, 10);
        assert_eq!(utilization(&packer), 0.0);
        try_place(&mut packer, 5, 5);
        assert!((utilization(&packer) - 25.0).abs() < 0.001);
        assert_eq!(packer.used_area, 25);
    }

    #[test]
    fn test_rects_overlap() {
        let a = AtlasRect { x: 0, y: 0, width: 2, height: 2 };
        let b = AtlasRect { x: 2, y: 0, width: 2, height: 2 };
        let c = AtlasRect { x: 1, y: 1, width: 2, height: 2 };
        assert!(!rects_overlap(&a, &b));
        assert!(rects_overlap(&a, &c));
        assert!(rects_overlap(&b, &c));
    }
}
