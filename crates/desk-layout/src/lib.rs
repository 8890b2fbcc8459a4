// ABOUTME: Panel layout engine for the three-panel workspace.
// ABOUTME: Keeps viewer, chat, and editor rectangles mutually consistent.

mod panels;

pub use panels::{
    Layout, LayoutError, PanelId, Rect, Viewport, GAP, MIN_CHAT_HEIGHT, MIN_VIEWER_HEIGHT,
};
