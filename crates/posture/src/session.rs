use {
    crate::{
        PostureConfig,
        classifier::{Classifier, PostureLabel},
        landmark::Snapshot,
        overlay::{Overlay, OverlayStyle, Viewport},
        smoother::Smoother,
    },
    log::{debug, info},
    std::sync::{Arc, Mutex},
};

/// Result of feeding one frame to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Raw classification of this frame.
    pub label: PostureLabel,
    /// Set when the caller should announce a label this frame.
    pub emitted: Option<PostureLabel>,
    /// Skeleton geometry, when the session knows its viewport.
    pub overlay: Option<Overlay>,
}

/// One camera session: classifier, notifier state and viewport.
///
/// Single writer. Frames go through `&mut self`; use `SharedSession` when
/// frames and the consumer live on different threads.
#[derive(Debug, Clone)]
pub struct PostureSession {
    classifier: Classifier,
    smoother: Smoother,
    viewport: Option<Viewport>,
    style: OverlayStyle,
    frames: u64,
    emissions: u64,
}

impl Default for PostureSession {
    fn default() -> Self {
        Self::new(&PostureConfig::default())
    }
}

impl PostureSession {
    pub fn new(config: &PostureConfig) -> Self {
        Self {
            classifier: Classifier::new(config.classifier().clone()),
            smoother: Smoother::new(config.min_interval_ms()),
            viewport: None,
            style: *config.overlay(),
            frames: 0,
            emissions: 0,
        }
    }

    /// Set the detector image size and the view the overlay is drawn into.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.scale().is_none() {
            debug!("viewport {:?} has a zero source dimension, overlay disabled", viewport);
        }
        self.viewport = Some(viewport);
    }

    pub fn clear_viewport(&mut self) {
        self.viewport = None;
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Process one frame of normalized landmarks observed at `now_ms`.
    pub fn process(&mut self, snapshot: &Snapshot, now_ms: u64) -> FrameOutcome {
        self.frames += 1;

        let label = self.classifier.classify(snapshot);
        let emitted = self.smoother.observe(label, now_ms);
        if let Some(label) = emitted {
            self.emissions += 1;
            info!("posture: {}", label);
        }

        let overlay = self.viewport.map(|vp| {
            let pixels = snapshot.denormalized(vp.source_width, vp.source_height);
            Overlay::build(&pixels, &vp)
        });

        FrameOutcome {
            label,
            emitted,
            overlay,
        }
    }

    /// Label most recently announced.
    pub fn current(&self) -> Option<PostureLabel> {
        self.smoother.last_label()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn emissions(&self) -> u64 {
        self.emissions
    }

    /// Start over as if no frame had been seen. Keeps the viewport.
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.frames = 0;
        self.emissions = 0;
    }
}

/// A `PostureSession` behind a lock, for a detector thread feeding frames
/// while another thread reads the current label.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<PostureSession>>,
}

impl SharedSession {
    pub fn new(session: PostureSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn process(&self, snapshot: &Snapshot, now_ms: u64) -> FrameOutcome {
        self.with(|session| session.process(snapshot, now_ms))
    }

    pub fn current(&self) -> Option<PostureLabel> {
        self.with(|session| session.current())
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut PostureSession) -> R) -> R {
        // a panic in another holder leaves the session usable
        let mut session = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut session)
    }
}
