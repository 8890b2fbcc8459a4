// ABOUTME: Web/video viewer state: entered URL, loaded URL, active video.
// ABOUTME: Recognizes video URLs and tracks per-video playback positions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// URL fragments that precede a video id. Matched right-to-left so the
/// last occurrence in the URL wins.
const VIDEO_ID_MARKERS: [&str; 5] = ["youtu.be/", "watch?v=", "&v=", "embed/", "/v/"];

/// Extract an 11-character video id from a URL, if it is a video link.
pub fn extract_video_id(url: &str) -> Option<String> {
    let (idx, marker) = VIDEO_ID_MARKERS
        .iter()
        .filter_map(|m| url.rfind(m).map(|i| (i, *m)))
        .max_by_key(|(i, _)| *i)?;

    let id: String = url[idx + marker.len()..]
        .chars()
        .take_while(|c| !matches!(c, '#' | '&' | '?'))
        .collect();

    if id.len() == 11 {
        Some(id)
    } else {
        None
    }
}

/// State of the viewer panel. `url` is the raw input field contents;
/// `loaded_url` is set only for non-video pages. Playback positions are
/// kept per video id so returning to a video resumes where it left off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerState {
    pub url: String,
    pub loaded_url: String,
    pub active_video: Option<String>,
    pub positions: HashMap<String, f64>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the entered URL. Video links activate the embedded player
    /// and clear the plain page; anything else loads as a plain page.
    /// Blank input is ignored.
    pub fn load_url(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        self.url = trimmed.to_string();

        match extract_video_id(trimmed) {
            Some(id) => {
                self.active_video = Some(id);
                self.loaded_url = String::new();
            }
            None => {
                self.active_video = None;
                self.loaded_url = trimmed.to_string();
            }
        }
    }

    /// Record playback progress for the active video
    pub fn record_position(&mut self, seconds: f64) {
        if let Some(id) = &self.active_video {
            self.positions.insert(id.clone(), seconds);
        }
    }

    /// Position to resume the active video at, 0.0 when unknown
    pub fn resume_position(&self) -> f64 {
        self.active_video
            .as_ref()
            .and_then(|id| self.positions.get(id))
            .copied()
            .unwrap_or(0.0)
    }
}
