// ABOUTME: Shared state types for the study-desk workspace.
// ABOUTME: Theme mode, chat conversation, viewer state, and editor helpers.

pub mod conversation;
pub mod editor;
pub mod theme;
pub mod viewer;

pub use conversation::{Conversation, Message, Role};
pub use editor::{Insertion, Snippet};
pub use theme::ThemeMode;
pub use viewer::ViewerState;
