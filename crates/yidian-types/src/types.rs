use serde::{Deserialize, Serialize};

/// Viewport coordinates of the most recent pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned box in viewport pixels. Absolute page positions are
/// obtained by offsetting with the scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Edge-inclusive containment.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right.max(other.right);
        let bottom = self.bottom.max(other.bottom);
        Rect {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }
}

/// Visible window geometry as reported by the page relay.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub inner_width: f64,
    pub inner_height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

/// A resolved word and the bounding box of the exact span it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCandidate {
    pub text: String,
    pub anchor: Rect,
}

/// One visible text node. `char_boxes[i]` is the box of the i-th character
/// (char index, not byte index); the two vectors are index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub char_boxes: Vec<Rect>,
}

impl TextRun {
    /// Bounding box of the whole run, None for an empty run.
    pub fn bounds(&self) -> Option<Rect> {
        let mut boxes = self.char_boxes.iter();
        let first = *boxes.next()?;
        Some(boxes.fold(first, |acc, b| acc.union(b)))
    }
}

/// The page relay's view of the visible text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub runs: Vec<TextRun>,
    pub viewport: Viewport,
}

/// Events streamed from the page relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    PointerMoved { x: f64, y: f64 },
    KeyPressed { key: String },
    Snapshot(PageSnapshot),
    Scrolled { x: f64, y: f64 },
    ViewportResized { width: f64, height: f64 },
}

/// Commands streamed back to the page relay. Positions are absolute page
/// pixels, already offset by scroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayCommand {
    ShowHighlight {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    HideHighlight,
    ShowPopup {
        left: f64,
        top: f64,
        text: String,
        below: bool,
    },
    HidePopup,
    ShowToast {
        message: String,
    },
    HideToast,
}

/// Internal events between the backend event loop and the UI overlay.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    HideOverlays,
    ShowHighlight {
        anchor: Rect,
        viewport: Viewport,
    },
    ShowTranslation {
        word: String,
        text: String,
        anchor: Rect,
        viewport: Viewport,
    },
    ToggleChanged {
        enabled: bool,
    },
}
