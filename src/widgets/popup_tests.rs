//! Tests for widgets/popup

use super::*;

#[test]
fn test_top_anchored_basic() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 50,
    };

    let area = top_anchored(frame, 100, 2);

    assert_eq!(area.x, 0);
    assert_eq!(area.y, 0);
    assert_eq!(area.width, 100);
    assert_eq!(area.height, 2);
}

#[test]
fn test_top_anchored_follows_frame_origin() {
    let frame = Rect {
        x: 4,
        y: 7,
        width: 30,
        height: 10,
    };

    let area = top_anchored(frame, 20, 1);

    assert_eq!(area.x, 4);
    assert_eq!(area.y, 7);
    assert_eq!(area.width, 20);
}

#[test]
fn test_top_anchored_too_large_is_clamped() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 3,
    };

    let area = top_anchored(frame, 200, 10);

    assert_eq!(area.width, 40);
    assert_eq!(area.height, 3);
}

#[test]
fn test_inset_rect_basic() {
    let area = Rect {
        x: 10,
        y: 20,
        width: 100,
        height: 50,
    };

    let inset = inset_rect(area, 5, 3);

    assert_eq!(inset.x, 15); // 10 + 5
    assert_eq!(inset.y, 23); // 20 + 3
    assert_eq!(inset.width, 90); // 100 - 10
    assert_eq!(inset.height, 44); // 50 - 6
}

#[test]
fn test_inset_rect_saturates() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 10,
        height: 10,
    };

    let inset = inset_rect(area, 20, 20);

    assert_eq!(inset.width, 0);
    assert_eq!(inset.height, 0);
}
