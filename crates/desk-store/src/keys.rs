// ABOUTME: Names of the persisted workspace keys.
// ABOUTME: One constant per key, plus the per-video position key builder.

/// JSON-serialized panel layout
pub const LAYOUT: &str = "layout";

/// Raw markdown text in the editor
pub const EDITOR_CONTENT: &str = "editorContent";

/// "dark" or "light"
pub const THEME: &str = "themeMode";

/// Raw contents of the viewer's URL input field
pub const URL: &str = "url";

/// URL currently loaded as a plain page (empty while a video is active)
pub const LOADED_URL: &str = "loadedUrl";

/// Active video identifier; absent when no video is loaded
pub const ACTIVE_VIDEO: &str = "videoId";

/// Playback position key for one video, in float seconds
pub fn video_position(video_id: &str) -> String {
    format!("videoTime.{video_id}")
}
