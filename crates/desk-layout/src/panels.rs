// ABOUTME: Rectangle arithmetic linking the three workspace panels.
// ABOUTME: Handles drag/resize adjustment, viewport clamping, and defaults.

use serde::{Deserialize, Serialize};

/// Spacing between adjacent panel edges, in pixels
pub const GAP: f32 = 10.0;

/// Minimum height of the web viewer panel
pub const MIN_VIEWER_HEIGHT: f32 = 100.0;

/// Minimum height of the chat panel (keeps the input row visible)
pub const MIN_CHAT_HEIGHT: f32 = 150.0;

/// One of the three fixed workspace panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelId {
    WebViewer,
    AiChat,
    TextEditor,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [PanelId::WebViewer, PanelId::AiChat, PanelId::TextEditor];

    /// Minimum (width, height) enforced by the viewport overflow clamp
    pub fn min_size(&self) -> (f32, f32) {
        match self {
            PanelId::WebViewer => (300.0, 100.0),
            PanelId::AiChat => (300.0, MIN_CHAT_HEIGHT),
            PanelId::TextEditor => (400.0, 300.0),
        }
    }
}

/// Rectangle in pixels, relative to the viewport's top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Current window dimensions, read at adjustment time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full panel arrangement. All three rectangles are peers; the
/// adjustment operations keep them consistent as a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub web_viewer: Rect,
    pub ai_chat: Rect,
    pub text_editor: Rect,
}

impl Layout {
    /// Default fractional split of the viewport: viewer and chat stacked
    /// in the left column at 40% width, editor taking the rest.
    pub fn default_for(viewport: Viewport) -> Self {
        Self {
            web_viewer: Rect::new(0.0, 0.0, viewport.width * 0.4, viewport.height * 0.45),
            ai_chat: Rect::new(
                0.0,
                viewport.height * 0.5,
                viewport.width * 0.4,
                viewport.height * 0.45,
            ),
            text_editor: Rect::new(
                viewport.width * 0.42,
                0.0,
                viewport.width * 0.55,
                viewport.height * 0.95,
            ),
        }
    }

    pub fn panel(&self, id: PanelId) -> Rect {
        match id {
            PanelId::WebViewer => self.web_viewer,
            PanelId::AiChat => self.ai_chat,
            PanelId::TextEditor => self.text_editor,
        }
    }

    fn panel_mut(&mut self, id: PanelId) -> &mut Rect {
        match id {
            PanelId::WebViewer => &mut self.web_viewer,
            PanelId::AiChat => &mut self.ai_chat,
            PanelId::TextEditor => &mut self.text_editor,
        }
    }

    /// Copy of this layout with one panel's rectangle replaced
    pub fn with_panel(&self, id: PanelId, rect: Rect) -> Self {
        let mut next = self.clone();
        *next.panel_mut(id) = rect;
        next
    }

    /// Recompute the other two panels after `changed` was dragged or
    /// resized (its new rectangle is already written into `self`).
    ///
    /// Minimum heights are hard floors: when the requested geometry
    /// would push another panel below its minimum, the changed panel
    /// yields instead.
    pub fn adjust_for_panel_change(&self, changed: PanelId, viewport: Viewport) -> Self {
        let mut next = self.clone();
        match changed {
            PanelId::WebViewer => adjust_after_viewer_change(&mut next, viewport),
            PanelId::AiChat => adjust_after_chat_change(&mut next, viewport),
            PanelId::TextEditor => adjust_after_editor_change(&mut next, viewport),
        }
        next
    }

    /// Shrink any panel whose right/bottom edge would fall outside the
    /// viewport. Panels are never moved, only shrunk, and never below
    /// their per-panel minimum size. No cross-panel linkage runs here.
    pub fn adjust_for_viewport_resize(&self, viewport: Viewport) -> Self {
        let mut next = self.clone();
        for id in PanelId::ALL {
            let (min_width, min_height) = id.min_size();
            let rect = next.panel_mut(id);
            if rect.right() > viewport.width {
                rect.width = min_width.max(viewport.width - rect.x - GAP);
            }
            if rect.bottom() > viewport.height {
                rect.height = min_height.max(viewport.height - rect.y - GAP);
            }
        }
        next
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Restore a persisted layout, falling back to the default split
    /// when nothing was saved or the saved value does not parse.
    pub fn restore(saved: Option<&str>, viewport: Viewport) -> Self {
        match saved {
            Some(json) => match Self::from_json(json) {
                Ok(layout) => layout,
                Err(err) => {
                    tracing::warn!("Discarding saved layout: {err}");
                    Self::default_for(viewport)
                }
            },
            None => Self::default_for(viewport),
        }
    }
}

fn adjust_after_viewer_change(layout: &mut Layout, viewport: Viewport) {
    layout.web_viewer.height = layout.web_viewer.height.max(MIN_VIEWER_HEIGHT);

    // The viewer yields space rather than squeezing chat below its minimum.
    if viewport.height - layout.web_viewer.height - GAP < MIN_CHAT_HEIGHT {
        layout.web_viewer.height = viewport.height - MIN_CHAT_HEIGHT - GAP;
    }

    layout.ai_chat.y = layout.web_viewer.bottom() + GAP;
    layout.ai_chat.width = layout.web_viewer.width;
    layout.ai_chat.height = MIN_CHAT_HEIGHT.max(viewport.height - layout.ai_chat.y - GAP);

    reflow_editor(layout, layout.web_viewer.width, viewport);
}

fn adjust_after_chat_change(layout: &mut Layout, viewport: Viewport) {
    layout.ai_chat.height = layout.ai_chat.height.max(MIN_CHAT_HEIGHT);

    // Chat moved up into the viewer: shorten the viewer, unless that
    // would take it below its minimum, in which case chat is pushed
    // back down instead.
    if layout.ai_chat.y < layout.web_viewer.bottom() {
        let max_viewer_height = layout.ai_chat.y - layout.web_viewer.y - GAP;
        if max_viewer_height < MIN_VIEWER_HEIGHT {
            layout.ai_chat.y = layout.web_viewer.y + MIN_VIEWER_HEIGHT + GAP;
        } else {
            layout.web_viewer.height = max_viewer_height;
        }
    }

    // Chat's width is now authoritative for the left column.
    layout.web_viewer.width = layout.ai_chat.width;

    reflow_editor(layout, layout.ai_chat.width, viewport);
}

fn adjust_after_editor_change(layout: &mut Layout, viewport: Viewport) {
    // The editor's left edge dictates the left column's width.
    let left_width = layout.text_editor.x - GAP;
    layout.web_viewer.width = left_width;
    layout.ai_chat.width = left_width;

    layout.ai_chat.height = layout.ai_chat.height.max(MIN_CHAT_HEIGHT);
    layout.web_viewer.height = layout.web_viewer.height.max(MIN_VIEWER_HEIGHT);

    // Scale the column down proportionally when it no longer fits,
    // with chat absorbing whatever the floor leaves over.
    let total = layout.web_viewer.height + layout.ai_chat.height + GAP;
    if total > viewport.height - GAP {
        let ratio = (viewport.height - 2.0 * GAP) / total;
        layout.web_viewer.height =
            MIN_VIEWER_HEIGHT.max((layout.web_viewer.height * ratio).floor());
        layout.ai_chat.height =
            MIN_CHAT_HEIGHT.max(viewport.height - layout.web_viewer.height - 2.0 * GAP);
        layout.ai_chat.y = layout.web_viewer.bottom() + GAP;
    }
}

/// Keep the editor clear of the left column and let it take whatever
/// width remains to the right.
fn reflow_editor(layout: &mut Layout, left_width: f32, viewport: Viewport) {
    layout.text_editor.x = layout.text_editor.x.max(left_width + GAP);
    layout.text_editor.width = viewport.width - layout.text_editor.x - GAP;
}
