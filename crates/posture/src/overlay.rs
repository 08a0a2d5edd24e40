use {
    crate::landmark::{JointId, JointMap, Snapshot},
    posture_base::Vec2,
    serde::{Deserialize, Serialize},
};

/// Joint pairs connected by a line in the overlay.
static EDGES: [(JointId, JointId); 10] = {
    use JointId::*;
    [
        // Arms
        (LeftShoulder, LeftElbow),
        (LeftElbow, LeftWrist),
        (RightShoulder, RightElbow),
        (RightElbow, RightWrist),
        // Legs
        (LeftHip, LeftKnee),
        (LeftKnee, LeftAnkle),
        (RightHip, RightKnee),
        (RightKnee, RightAnkle),
        // Shoulder and hip lines
        (LeftShoulder, RightShoulder),
        (LeftHip, RightHip),
    ]
};

/// The fixed skeleton edge table.
pub fn edges() -> &'static [(JointId, JointId)] {
    &EDGES
}

/// A joint position in destination (screen) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub joint: JointId,
    pub position: Vec2<f64>,
}

/// Per-axis scale from source-image pixels to destination pixels.
///
/// The axes scale independently; differing aspect ratios stretch the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportScale {
    scale: Vec2<f64>,
}

impl ViewportScale {
    /// `None` when the source has a zero dimension.
    pub fn new(source_width: u32, source_height: u32, dest_width: f64, dest_height: f64) -> Option<Self> {
        if source_width == 0 || source_height == 0 {
            return None;
        }
        Some(Self {
            scale: Vec2::new(
                dest_width / source_width as f64,
                dest_height / source_height as f64,
            ),
        })
    }

    pub fn x(&self) -> f64 {
        self.scale.x
    }

    pub fn y(&self) -> f64 {
        self.scale.y
    }

    pub fn apply(&self, position: Vec2<f64>) -> Vec2<f64> {
        position * self.scale
    }
}

/// Map every landmark (source pixels) into destination pixels, in snapshot order.
pub fn project(
    landmarks: &Snapshot,
    source_width: u32,
    source_height: u32,
    dest_width: f64,
    dest_height: f64,
) -> Vec<ScreenPoint> {
    match ViewportScale::new(source_width, source_height, dest_width, dest_height) {
        Some(scale) => project_with(landmarks, &scale),
        None => Vec::new(),
    }
}

fn project_with(landmarks: &Snapshot, scale: &ViewportScale) -> Vec<ScreenPoint> {
    landmarks
        .iter()
        .map(|lm| ScreenPoint {
            joint: lm.id,
            position: scale.apply(lm.position),
        })
        .collect()
}

/// Resolve the edge table against a snapshot, first match per joint.
/// Edges with a missing endpoint are skipped.
pub fn resolve_edges(
    landmarks: &Snapshot,
    source_width: u32,
    source_height: u32,
    dest_width: f64,
    dest_height: f64,
) -> Vec<(ScreenPoint, ScreenPoint)> {
    match ViewportScale::new(source_width, source_height, dest_width, dest_height) {
        Some(scale) => resolve_edges_with(&JointMap::from_snapshot(landmarks), &scale),
        None => Vec::new(),
    }
}

fn resolve_edges_with(joints: &JointMap, scale: &ViewportScale) -> Vec<(ScreenPoint, ScreenPoint)> {
    let point = |joint: JointId| {
        joints.get(joint).map(|p| ScreenPoint {
            joint,
            position: scale.apply(p),
        })
    };

    EDGES
        .iter()
        .filter_map(|&(a, b)| Some((point(a)?, point(b)?)))
        .collect()
}

/// Source image and destination view sizes for one overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub source_width: u32,
    pub source_height: u32,
    pub dest_width: f64,
    pub dest_height: f64,
}

impl Viewport {
    pub fn new(source_width: u32, source_height: u32, dest_width: f64, dest_height: f64) -> Self {
        Self {
            source_width,
            source_height,
            dest_width,
            dest_height,
        }
    }

    pub fn scale(&self) -> Option<ViewportScale> {
        ViewportScale::new(
            self.source_width,
            self.source_height,
            self.dest_width,
            self.dest_height,
        )
    }
}

/// Drawing sizes, in destination pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub point_radius: f64,
    pub stroke_width: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            point_radius: 6.0,
            stroke_width: 2.0,
        }
    }
}

/// Everything a renderer needs to draw one frame's skeleton.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub points: Vec<ScreenPoint>,
    pub edges: Vec<(ScreenPoint, ScreenPoint)>,
}

impl Overlay {
    /// Project `landmarks` (source pixels) through `viewport`.
    /// A degenerate viewport yields an empty overlay.
    pub fn build(landmarks: &Snapshot, viewport: &Viewport) -> Self {
        let Some(scale) = viewport.scale() else {
            return Self::default();
        };
        Self {
            points: project_with(landmarks, &scale),
            edges: resolve_edges_with(&JointMap::from_snapshot(landmarks), &scale),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
