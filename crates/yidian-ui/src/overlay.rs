use yidian_core::placement::{self, Placement, PopupSize};
use yidian_types::{OverlayCommand, Rect, Viewport};

/// Text metrics used to estimate the rendered popup extent. The relay has
/// the real layout; these only feed the placement math.
pub const CHAR_WIDTH_PX: f64 = 8.0;
pub const LINE_HEIGHT_PX: f64 = 20.0;
pub const PADDING_H_PX: f64 = 8.0;
pub const PADDING_V_PX: f64 = 6.0;

#[derive(Debug, Default)]
struct HighlightBox {
    visible: bool,
}

#[derive(Debug, Default)]
struct PopupBox {
    visible: bool,
}

#[derive(Debug, Default)]
struct StatusToast {
    visible: bool,
    generation: u64,
}

/// Owns the three overlay elements and turns state changes into commands
/// for the page relay. Redundant hides are suppressed.
pub struct OverlayManager {
    highlight: HighlightBox,
    popup: PopupBox,
    toast: StatusToast,
    popup_max_width: f64,
}

impl OverlayManager {
    pub fn new(popup_max_width: f64) -> Self {
        Self {
            highlight: HighlightBox::default(),
            popup: PopupBox::default(),
            toast: StatusToast::default(),
            popup_max_width,
        }
    }

    /// Estimated rendered extent of the popup for the given text.
    pub fn measure_popup(&self, text: &str) -> PopupSize {
        let chars = text.chars().count().max(1) as f64;
        let text_width = chars * CHAR_WIDTH_PX;
        let usable = (self.popup_max_width - 2.0 * PADDING_H_PX).max(CHAR_WIDTH_PX);
        let lines = (text_width / usable).ceil().max(1.0);

        PopupSize {
            width: text_width.min(usable) + 2.0 * PADDING_H_PX,
            height: lines * LINE_HEIGHT_PX + 2.0 * PADDING_V_PX,
        }
    }

    /// Hide the pointer-driven overlays (highlight and popup). The toast
    /// has its own lifetime.
    pub fn hide_transient(&mut self) -> Vec<OverlayCommand> {
        let mut commands = Vec::new();
        if self.highlight.visible {
            self.highlight.visible = false;
            commands.push(OverlayCommand::HideHighlight);
        }
        if self.popup.visible {
            self.popup.visible = false;
            commands.push(OverlayCommand::HidePopup);
        }
        commands
    }

    pub fn show_highlight(&mut self, anchor: &Rect, viewport: &Viewport) -> OverlayCommand {
        self.highlight.visible = true;
        let r = placement::highlight_rect(anchor, viewport);
        OverlayCommand::ShowHighlight {
            left: r.left,
            top: r.top,
            width: r.width,
            height: r.height,
        }
    }

    pub fn show_popup(&mut self, anchor: &Rect, viewport: &Viewport, text: &str) -> OverlayCommand {
        self.popup.visible = true;
        let size = self.measure_popup(text);
        let Placement { top, left, below } = placement::place_popup(anchor, size, viewport);
        OverlayCommand::ShowPopup {
            left,
            top,
            text: text.to_string(),
            below,
        }
    }

    /// Show the toast and return the generation its dismiss timer must
    /// present.
    pub fn show_toast(&mut self, message: &str) -> (OverlayCommand, u64) {
        self.toast.visible = true;
        self.toast.generation += 1;
        (
            OverlayCommand::ShowToast {
                message: message.to_string(),
            },
            self.toast.generation,
        )
    }

    /// Dismiss the toast, unless a newer toast has replaced the one the
    /// timer was armed for.
    pub fn dismiss_toast(&mut self, generation: u64) -> Option<OverlayCommand> {
        if self.toast.visible && self.toast.generation == generation {
            self.toast.visible = false;
            Some(OverlayCommand::HideToast)
        } else {
            None
        }
    }

    pub fn highlight_visible(&self) -> bool {
        self.highlight.visible
    }

    pub fn popup_visible(&self) -> bool {
        self.popup.visible
    }

    pub fn toast_visible(&self) -> bool {
        self.toast.visible
    }
}
