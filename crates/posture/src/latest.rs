use {
    crate::landmark::Snapshot,
    serde::{Deserialize, Serialize},
    tokio::sync::watch,
};

/// A snapshot stamped with its capture time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimedSnapshot {
    pub t_ms: u64,
    #[serde(rename = "landmarks")]
    pub snapshot: Snapshot,
}

impl TimedSnapshot {
    pub fn new(t_ms: u64, snapshot: Snapshot) -> Self {
        Self { t_ms, snapshot }
    }
}

/// Anything that delivers landmark frames, one at a time.
///
/// `recv` returns `None` once the source is closed; no more frames follow.
#[allow(async_fn_in_trait)]
pub trait LandmarkSource {
    async fn recv(&mut self) -> Option<TimedSnapshot>;
}

/// Creates a keep-only-latest slot between a detector and its consumer.
///
/// Publishing never blocks. A frame that has not been received yet is
/// replaced by the next one.
pub fn latest_channel() -> (SnapshotPublisher, SnapshotReceiver) {
    let (tx, rx) = watch::channel(None);
    (
        SnapshotPublisher { tx, seq: 0 },
        SnapshotReceiver {
            rx,
            last_seq: 0,
            dropped: 0,
        },
    )
}

type Slot = Option<(u64, TimedSnapshot)>;

/// Producer half. Dropping it closes the stream.
#[derive(Debug)]
pub struct SnapshotPublisher {
    tx: watch::Sender<Slot>,
    seq: u64,
}

impl SnapshotPublisher {
    /// Replace the pending frame. Returns `false` when the receiver is gone.
    pub fn publish(&mut self, frame: TimedSnapshot) -> bool {
        self.seq += 1;
        self.tx.send_replace(Some((self.seq, frame)));
        !self.tx.is_closed()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer half.
#[derive(Debug)]
pub struct SnapshotReceiver {
    rx: watch::Receiver<Slot>,
    last_seq: u64,
    dropped: u64,
}

impl SnapshotReceiver {
    /// Frames that were replaced before they could be received.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl LandmarkSource for SnapshotReceiver {
    async fn recv(&mut self) -> Option<TimedSnapshot> {
        self.rx.changed().await.ok()?;
        let (seq, frame) = self.rx.borrow_and_update().clone()?;
        self.dropped += seq.saturating_sub(self.last_seq + 1);
        self.last_seq = seq;
        Some(frame)
    }
}
