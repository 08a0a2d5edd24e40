use {crate::classifier::PostureLabel, log::debug};

/// Minimum gap between two announcements.
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 1000;

/// What the notifier last announced. `last_label` is `None` until the first emission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmootherState {
    pub last_label: Option<PostureLabel>,
    pub last_emit_ms: u64,
}

/// Decide whether `label` should be announced at `now_ms`.
///
/// A label is announced when it differs from the last announced one and more
/// than `min_interval_ms` has passed since that announcement. The very first
/// announcement is not rate limited. Nothing is remembered about suppressed
/// labels: a change that arrives too early is dropped, and only shows up later
/// if it is still being classified once the interval has passed.
pub fn observe(
    state: &mut SmootherState,
    label: PostureLabel,
    now_ms: u64,
    min_interval_ms: u64,
) -> Option<PostureLabel> {
    let elapsed_ok = match state.last_label {
        None => true,
        Some(last) if last == label => return None,
        Some(_) => now_ms.saturating_sub(state.last_emit_ms) > min_interval_ms,
    };
    if !elapsed_ok {
        return None;
    }

    state.last_label = Some(label);
    state.last_emit_ms = now_ms;
    Some(label)
}

/// Owns a `SmootherState` together with its interval.
#[derive(Debug, Clone)]
pub struct Smoother {
    state: SmootherState,
    min_interval_ms: u64,
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL_MS)
    }
}

impl Smoother {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            state: SmootherState::default(),
            min_interval_ms,
        }
    }

    pub fn observe(&mut self, label: PostureLabel, now_ms: u64) -> Option<PostureLabel> {
        let previous = self.state.last_label;
        let emitted = observe(&mut self.state, label, now_ms, self.min_interval_ms);
        if let Some(label) = emitted {
            debug!("posture {:?} -> {:?} at {}ms", previous, label, now_ms);
        }
        emitted
    }

    pub fn last_label(&self) -> Option<PostureLabel> {
        self.state.last_label
    }

    pub fn state(&self) -> &SmootherState {
        &self.state
    }

    pub fn min_interval_ms(&self) -> u64 {
        self.min_interval_ms
    }

    /// Forget the last announcement, e.g. when a new session starts.
    pub fn reset(&mut self) {
        self.state = SmootherState::default();
    }
}
