// Host-side tests for the settled-slide index state.

use gallery_core::{GalleryError, SlideIndex};

#[test]
fn rejects_an_empty_gallery() {
    assert_eq!(
        SlideIndex::new(0, 0).unwrap_err(),
        GalleryError::InvalidConfiguration
    );
}

#[test]
fn rejects_an_out_of_range_start() {
    assert_eq!(
        SlideIndex::new(3, 3).unwrap_err(),
        GalleryError::IndexOutOfRange { index: 3, count: 3 }
    );
}

#[test]
fn previous_clamps_at_the_first_slide() {
    let mut idx = SlideIndex::new(3, 0).unwrap();
    assert!(!idx.previous());
    assert_eq!(idx.current(), 0);
    assert!(idx.at_start());
}

#[test]
fn next_clamps_at_the_last_slide() {
    let mut idx = SlideIndex::new(3, 2).unwrap();
    assert!(!idx.next());
    assert_eq!(idx.current(), 2);
    assert!(idx.at_end());
}

#[test]
fn steps_report_movement() {
    let mut idx = SlideIndex::new(3, 1).unwrap();
    assert!(idx.next());
    assert_eq!(idx.current(), 2);
    assert!(idx.previous());
    assert!(idx.previous());
    assert_eq!(idx.current(), 0);
}

#[test]
fn jump_to_sets_unconditionally() {
    let mut idx = SlideIndex::new(5, 1).unwrap();
    idx.jump_to(4).unwrap();
    assert_eq!(idx.current(), 4);
    // Jumping to the current index is allowed.
    idx.jump_to(4).unwrap();
    assert_eq!(idx.current(), 4);
}

#[test]
fn jump_to_out_of_range_leaves_index_untouched() {
    let mut idx = SlideIndex::new(5, 1).unwrap();
    assert_eq!(
        idx.jump_to(5).unwrap_err(),
        GalleryError::IndexOutOfRange { index: 5, count: 5 }
    );
    assert_eq!(idx.current(), 1);
}

#[test]
fn any_walk_stays_in_bounds() {
    let mut idx = SlideIndex::new(4, 0).unwrap();
    for step in 0..40 {
        if step % 3 == 0 {
            idx.previous();
        } else {
            idx.next();
        }
        assert!(idx.current() < idx.count());
    }
}
