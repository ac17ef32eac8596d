use yidian_types::{Rect, Viewport};

/// Gap between the popup and the anchor, and between the popup and the
/// viewport edge after clamping.
pub const POPUP_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupSize {
    pub width: f64,
    pub height: f64,
}

/// Absolute page position for the popup. `below` flags the fallback
/// placement under the anchor, used to flip the popup's arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub below: bool,
}

/// Place the popup centered over the anchor, preferring above, clamped
/// into the viewport. Never fails; a popup larger than the viewport may
/// still overflow.
pub fn place_popup(anchor: &Rect, popup: PopupSize, vp: &Viewport) -> Placement {
    let mut top = anchor.top + vp.scroll_y - popup.height - POPUP_MARGIN;
    let mut left = anchor.left + vp.scroll_x + anchor.width / 2.0 - popup.width / 2.0;
    let mut below = false;

    if left + popup.width > vp.inner_width + vp.scroll_x {
        left = vp.inner_width + vp.scroll_x - popup.width - POPUP_MARGIN;
    }
    if left < vp.scroll_x {
        left = vp.scroll_x + POPUP_MARGIN;
    }
    // Not enough room above: flip below the anchor. Evaluated against the
    // default "above" top, after the horizontal clamps.
    if top < vp.scroll_y {
        top = anchor.bottom + vp.scroll_y + POPUP_MARGIN;
        below = true;
    }

    Placement { top, left, below }
}

/// Absolute page box for the highlight overlay: the anchor offset by
/// scroll, independent of where the popup lands.
pub fn highlight_rect(anchor: &Rect, vp: &Viewport) -> Rect {
    Rect::new(
        anchor.left + vp.scroll_x,
        anchor.top + vp.scroll_y,
        anchor.width,
        anchor.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            inner_width: 1000.0,
            inner_height: 800.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    const POPUP: PopupSize = PopupSize {
        width: 80.0,
        height: 30.0,
    };

    #[test]
    fn prefers_centered_above() {
        let anchor = Rect::new(100.0, 200.0, 50.0, 20.0);
        let p = place_popup(&anchor, POPUP, &viewport());
        assert_eq!(p.top, 160.0);
        assert_eq!(p.left, 85.0);
        assert!(!p.below);
    }

    #[test]
    fn falls_back_below_when_no_room_above() {
        let anchor = Rect::new(100.0, 5.0, 50.0, 20.0);
        let p = place_popup(&anchor, POPUP, &viewport());
        // bottom = 25, plus margin
        assert_eq!(p.top, 35.0);
        assert!(p.below);
    }

    #[test]
    fn clamps_at_right_edge() {
        let anchor = Rect::new(990.0, 200.0, 50.0, 20.0);
        let p = place_popup(&anchor, POPUP, &viewport());
        // default left 975 overflows 1000, clamp to 1000 - 80 - 10
        assert_eq!(p.left, 910.0);
        assert!(!p.below);
    }

    #[test]
    fn clamps_at_left_edge() {
        let anchor = Rect::new(0.0, 200.0, 20.0, 20.0);
        let p = place_popup(&anchor, POPUP, &viewport());
        // default left = 10 - 40 = -30, clamp to scroll_x + margin
        assert_eq!(p.left, 10.0);
    }

    #[test]
    fn scroll_offsets_apply_to_both_axes() {
        let anchor = Rect::new(100.0, 200.0, 50.0, 20.0);
        let vp = Viewport {
            scroll_x: 300.0,
            scroll_y: 500.0,
            ..viewport()
        };
        let p = place_popup(&anchor, POPUP, &vp);
        assert_eq!(p.top, 200.0 + 500.0 - 30.0 - 10.0);
        assert_eq!(p.left, 100.0 + 300.0 + 25.0 - 40.0);
        assert!(!p.below);
    }

    #[test]
    fn highlight_matches_anchor_exactly() {
        let anchor = Rect::new(100.0, 200.0, 50.0, 20.0);
        let vp = Viewport {
            scroll_x: 30.0,
            scroll_y: 70.0,
            ..viewport()
        };
        let h = highlight_rect(&anchor, &vp);
        assert_eq!(h, Rect::new(130.0, 270.0, 50.0, 20.0));
    }
}
