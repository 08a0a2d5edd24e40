use posture::{LandmarkSource, PostureError, TimedSnapshot};
use std::collections::VecDeque;

/// Frames read from a JSON-lines recording, one `TimedSnapshot` per line.
pub struct ReplaySource {
    frames: VecDeque<TimedSnapshot>,
}

impl ReplaySource {
    /// Parse a recording. Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self, PostureError> {
        let mut frames = VecDeque::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let frame: TimedSnapshot = serde_json::from_str(line)
                .map_err(|e| PostureError::Parse(format!("line {}: {}", index + 1, e)))?;
            frames.push_back(frame);
        }
        Ok(Self { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn last(&self) -> Option<&TimedSnapshot> {
        self.frames.back()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl LandmarkSource for ReplaySource {
    async fn recv(&mut self) -> Option<TimedSnapshot> {
        self.frames.pop_front()
    }
}
