// ABOUTME: The single authoritative workspace snapshot.
// ABOUTME: Panels render what they are handed; all changes flow through here.

use desk_core::{editor, Conversation, ThemeMode, ViewerState};
use desk_layout::{Layout, PanelId, Rect, Viewport};
use desk_store::{keys, StateStore};

/// Everything that can happen to the workspace from the UI side
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceEvent {
    /// A panel finished a drag or resize; its new geometry follows.
    PanelChanged {
        panel: PanelId,
        position: (f32, f32),
        size: (f32, f32),
    },
    /// The window was resized; the new size arrives via the viewport.
    ViewportResized,
    ThemeToggled,
    EditorChanged { content: String },
    /// The assistant rewrote the document and the user accepted it.
    SuggestionApplied { content: String },
    UrlLoaded { url: String },
    /// Playback progress report for the active video
    VideoProgress { seconds: f64 },
    ChatMessageSent { content: String },
    ChatReplyReceived { content: String },
    ChatCleared,
}

/// One consistent snapshot of workspace state. Events replace the
/// layout wholesale rather than mutating it, so readers only ever see
/// committed layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub layout: Layout,
    pub theme: ThemeMode,
    pub editor_content: String,
    pub viewer: ViewerState,
    pub conversation: Conversation,
}

impl Workspace {
    /// Fresh workspace with the default layout for this viewport
    pub fn new(viewport: Viewport) -> Self {
        Self {
            layout: Layout::default_for(viewport),
            theme: ThemeMode::default(),
            editor_content: editor::default_content().to_string(),
            viewer: ViewerState::new(),
            conversation: Conversation::new(),
        }
    }

    /// Rebuild the workspace from persisted state. Anything missing or
    /// malformed falls back to its default; restore never fails.
    pub fn restore<S: StateStore>(store: &S, viewport: Viewport) -> Self {
        let layout = Layout::restore(store.get(keys::LAYOUT).as_deref(), viewport);

        let theme = store
            .get(keys::THEME)
            .and_then(|name| ThemeMode::from_name(&name))
            .unwrap_or_default();

        let editor_content = store
            .get(keys::EDITOR_CONTENT)
            .unwrap_or_else(|| editor::default_content().to_string());

        let mut viewer = ViewerState {
            url: store.get(keys::URL).unwrap_or_default(),
            loaded_url: store.get(keys::LOADED_URL).unwrap_or_default(),
            active_video: store.get(keys::ACTIVE_VIDEO),
            ..ViewerState::new()
        };
        if let Some(id) = viewer.active_video.clone() {
            if let Some(seconds) = read_position(store, &id) {
                viewer.positions.insert(id, seconds);
            }
        }

        Self {
            layout,
            theme,
            editor_content,
            viewer,
            conversation: Conversation::new(),
        }
    }

    /// Apply one UI event and persist the keys it touched. Runs
    /// synchronously on the caller's thread; cheap enough to invoke
    /// per resize event without debouncing.
    pub fn apply<S: StateStore>(&mut self, event: WorkspaceEvent, viewport: Viewport, store: &mut S) {
        match event {
            WorkspaceEvent::PanelChanged {
                panel,
                position,
                size,
            } => {
                let rect = Rect::new(position.0, position.1, size.0, size.1);
                self.layout = self
                    .layout
                    .with_panel(panel, rect)
                    .adjust_for_panel_change(panel, viewport);
                self.persist_layout(store);
            }
            WorkspaceEvent::ViewportResized => {
                self.layout = self.layout.adjust_for_viewport_resize(viewport);
                self.persist_layout(store);
            }
            WorkspaceEvent::ThemeToggled => {
                self.theme = self.theme.toggle();
                store.set(keys::THEME, self.theme.as_str());
            }
            WorkspaceEvent::EditorChanged { content }
            | WorkspaceEvent::SuggestionApplied { content } => {
                self.editor_content = content;
                store.set(keys::EDITOR_CONTENT, &self.editor_content);
            }
            WorkspaceEvent::UrlLoaded { url } => {
                self.viewer.load_url(&url);
                store.set(keys::URL, &self.viewer.url);
                store.set(keys::LOADED_URL, &self.viewer.loaded_url);
                match self.viewer.active_video.clone() {
                    Some(id) => {
                        store.set(keys::ACTIVE_VIDEO, &id);
                        // Resume where this video left off in an earlier session.
                        if let Some(seconds) = read_position(store, &id) {
                            self.viewer.positions.insert(id, seconds);
                        }
                    }
                    None => store.remove(keys::ACTIVE_VIDEO),
                }
            }
            WorkspaceEvent::VideoProgress { seconds } => {
                if let Some(id) = self.viewer.active_video.clone() {
                    self.viewer.record_position(seconds);
                    store.set(&keys::video_position(&id), &seconds.to_string());
                }
            }
            WorkspaceEvent::ChatMessageSent { content } => {
                self.conversation.push_user(content);
            }
            WorkspaceEvent::ChatReplyReceived { content } => {
                self.conversation.push_assistant(content);
            }
            WorkspaceEvent::ChatCleared => {
                self.conversation.clear();
            }
        }
    }

    fn persist_layout<S: StateStore>(&self, store: &mut S) {
        match self.layout.to_json() {
            Ok(json) => store.set(keys::LAYOUT, &json),
            Err(err) => tracing::warn!("Failed to serialize layout: {err}"),
        }
    }
}

fn read_position<S: StateStore>(store: &S, video_id: &str) -> Option<f64> {
    store
        .get(&keys::video_position(video_id))
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_store::MemoryStore;

    const VIEWPORT: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn restore_from_empty_store_uses_defaults() {
        let store = MemoryStore::new();
        let workspace = Workspace::restore(&store, VIEWPORT);

        assert_eq!(workspace.layout, Layout::default_for(VIEWPORT));
        assert_eq!(workspace.theme, ThemeMode::Dark);
        assert!(workspace.editor_content.starts_with("# Welcome"));
        assert!(workspace.conversation.is_empty());
    }

    #[test]
    fn restore_survives_corrupt_layout() {
        let mut store = MemoryStore::new();
        store.set(keys::LAYOUT, "{broken");
        store.set(keys::THEME, "light");

        let workspace = Workspace::restore(&store, VIEWPORT);

        assert_eq!(workspace.layout, Layout::default_for(VIEWPORT));
        assert_eq!(workspace.theme, ThemeMode::Light);
    }

    #[test]
    fn panel_change_adjusts_and_persists_layout() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(VIEWPORT);

        workspace.apply(
            WorkspaceEvent::PanelChanged {
                panel: PanelId::AiChat,
                position: (0.0, 400.0),
                size: (500.0, 360.0),
            },
            VIEWPORT,
            &mut store,
        );

        assert_eq!(workspace.layout.web_viewer.width, 500.0);

        let saved = store.get(keys::LAYOUT).unwrap();
        assert_eq!(Layout::from_json(&saved).unwrap(), workspace.layout);
    }

    #[test]
    fn layout_round_trips_through_restore() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(VIEWPORT);

        workspace.apply(
            WorkspaceEvent::PanelChanged {
                panel: PanelId::TextEditor,
                position: (500.0, 0.0),
                size: (490.0, 760.0),
            },
            VIEWPORT,
            &mut store,
        );

        let restored = Workspace::restore(&store, VIEWPORT);
        assert_eq!(restored.layout, workspace.layout);
    }

    #[test]
    fn viewport_resize_reclamps_and_persists() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(Viewport::new(1200.0, 800.0));
        workspace.layout.text_editor = Rect::new(700.0, 0.0, 490.0, 760.0);

        workspace.apply(
            WorkspaceEvent::ViewportResized,
            Viewport::new(1000.0, 800.0),
            &mut store,
        );

        assert_eq!(workspace.layout.text_editor.width, 290.0);
        assert!(store.get(keys::LAYOUT).is_some());
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(VIEWPORT);

        workspace.apply(WorkspaceEvent::ThemeToggled, VIEWPORT, &mut store);
        assert_eq!(workspace.theme, ThemeMode::Light);
        assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));

        let restored = Workspace::restore(&store, VIEWPORT);
        assert_eq!(restored.theme, ThemeMode::Light);
    }

    #[test]
    fn editor_content_persists() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(VIEWPORT);

        workspace.apply(
            WorkspaceEvent::EditorChanged {
                content: "# My notes".to_string(),
            },
            VIEWPORT,
            &mut store,
        );

        let restored = Workspace::restore(&store, VIEWPORT);
        assert_eq!(restored.editor_content, "# My notes");
    }

    #[test]
    fn video_progress_survives_restore() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(VIEWPORT);

        workspace.apply(
            WorkspaceEvent::UrlLoaded {
                url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            },
            VIEWPORT,
            &mut store,
        );
        workspace.apply(
            WorkspaceEvent::VideoProgress { seconds: 123.5 },
            VIEWPORT,
            &mut store,
        );

        let restored = Workspace::restore(&store, VIEWPORT);
        assert_eq!(restored.viewer.active_video.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(restored.viewer.resume_position(), 123.5);
    }

    #[test]
    fn plain_url_clears_persisted_video() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(VIEWPORT);

        workspace.apply(
            WorkspaceEvent::UrlLoaded {
                url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            },
            VIEWPORT,
            &mut store,
        );
        workspace.apply(
            WorkspaceEvent::UrlLoaded {
                url: "https://example.com/article".to_string(),
            },
            VIEWPORT,
            &mut store,
        );

        assert_eq!(store.get(keys::ACTIVE_VIDEO), None);
        assert_eq!(
            store.get(keys::LOADED_URL).as_deref(),
            Some("https://example.com/article")
        );
    }

    #[test]
    fn returning_to_a_video_resumes_saved_position() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(VIEWPORT);

        workspace.apply(
            WorkspaceEvent::UrlLoaded {
                url: "https://youtu.be/aaaaaaaaaaa".to_string(),
            },
            VIEWPORT,
            &mut store,
        );
        workspace.apply(
            WorkspaceEvent::VideoProgress { seconds: 60.0 },
            VIEWPORT,
            &mut store,
        );
        workspace.apply(
            WorkspaceEvent::UrlLoaded {
                url: "https://youtu.be/bbbbbbbbbbb".to_string(),
            },
            VIEWPORT,
            &mut store,
        );
        assert_eq!(workspace.viewer.resume_position(), 0.0);

        workspace.apply(
            WorkspaceEvent::UrlLoaded {
                url: "https://youtu.be/aaaaaaaaaaa".to_string(),
            },
            VIEWPORT,
            &mut store,
        );
        assert_eq!(workspace.viewer.resume_position(), 60.0);
    }

    #[test]
    fn chat_events_drive_conversation() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(VIEWPORT);

        workspace.apply(
            WorkspaceEvent::ChatMessageSent {
                content: "what is ownership?".to_string(),
            },
            VIEWPORT,
            &mut store,
        );
        workspace.apply(
            WorkspaceEvent::ChatReplyReceived {
                content: "each value has a single owner".to_string(),
            },
            VIEWPORT,
            &mut store,
        );

        assert_eq!(workspace.conversation.len(), 2);
        assert_eq!(
            workspace.conversation.latest_assistant().unwrap().content,
            "each value has a single owner"
        );

        workspace.apply(WorkspaceEvent::ChatCleared, VIEWPORT, &mut store);
        assert!(workspace.conversation.is_empty());
    }

    #[test]
    fn suggestion_replaces_editor_content() {
        let mut store = MemoryStore::new();
        let mut workspace = Workspace::new(VIEWPORT);

        workspace.apply(
            WorkspaceEvent::SuggestionApplied {
                content: "# Rewritten".to_string(),
            },
            VIEWPORT,
            &mut store,
        );

        assert_eq!(workspace.editor_content, "# Rewritten");
        assert_eq!(store.get(keys::EDITOR_CONTENT).as_deref(), Some("# Rewritten"));
    }
}
