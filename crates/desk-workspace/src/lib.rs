// ABOUTME: Workspace orchestration layer.
// ABOUTME: Routes UI events through the layout engine and persists state.

mod workspace;

pub use workspace::{Workspace, WorkspaceEvent};
