//! Posture classification for body-landmark streams.
//!
//! Frames of pose landmarks go in; a debounced posture label and skeleton
//! overlay geometry come out. Camera capture, the pose model and rendering
//! live elsewhere.

pub mod classifier;
pub mod config;
pub mod error;
pub mod geometry;
pub mod landmark;
pub mod latest;
pub mod monitor;
pub mod overlay;
pub mod session;
pub mod smoother;

pub use classifier::{Classifier, ClassifierConfig, PostureLabel, classify};
pub use config::PostureConfig;
pub use error::PostureError;
pub use landmark::{JOINT_COUNT, JointId, JointMap, Landmark, Snapshot};
pub use latest::{LandmarkSource, SnapshotPublisher, SnapshotReceiver, TimedSnapshot, latest_channel};
pub use monitor::{MonitorStats, PostureMonitor};
pub use overlay::{Overlay, OverlayStyle, ScreenPoint, Viewport, ViewportScale, edges, project, resolve_edges};
pub use session::{FrameOutcome, PostureSession, SharedSession};
pub use smoother::{DEFAULT_MIN_INTERVAL_MS, Smoother, SmootherState, observe};
