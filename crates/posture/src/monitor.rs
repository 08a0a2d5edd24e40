use {
    crate::{
        latest::LandmarkSource,
        session::{FrameOutcome, PostureSession},
    },
    log::info,
};

/// Totals for one monitor run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorStats {
    pub frames: u64,
    pub emitted: u64,
}

/// Drives a session from a landmark source until the source closes.
pub struct PostureMonitor {
    session: PostureSession,
}

impl PostureMonitor {
    pub fn new(session: PostureSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &PostureSession {
        &self.session
    }

    pub fn into_session(self) -> PostureSession {
        self.session
    }

    /// Feed every frame from `source` to the session and hand each outcome to
    /// `on_frame`. Returns when the source closes.
    pub async fn run<S: LandmarkSource>(
        &mut self,
        source: &mut S,
        mut on_frame: impl FnMut(&FrameOutcome),
    ) -> MonitorStats {
        let mut stats = MonitorStats::default();
        while let Some(frame) = source.recv().await {
            let outcome = self.session.process(&frame.snapshot, frame.t_ms);
            stats.frames += 1;
            if outcome.emitted.is_some() {
                stats.emitted += 1;
            }
            on_frame(&outcome);
        }
        info!(
            "landmark source closed after {} frames, {} announcements",
            stats.frames, stats.emitted
        );
        stats
    }
}
