use {
    crate::{
        geometry::{is_flat, midpoint_y, vertical_distance},
        landmark::{JointId, JointMap, Snapshot},
    },
    posture_base::Vec2,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Max height difference (normalized) for a segment to count as lying flat.
pub const FLATNESS_THRESHOLD: f64 = 0.08;
/// Shoulder-to-ankle extents below this are treated as lying down.
pub const MIN_TOTAL_HEIGHT: f64 = 0.25;
/// Torso share of total height required for both upright labels.
pub const TORSO_RATIO_MIN: f64 = 0.28;
/// Thigh and shin share of total height required for Standing.
pub const STANDING_SEGMENT_RATIO_MIN: f64 = 0.25;
/// Thigh share of total height must stay below this for Sitting.
pub const SITTING_THIGH_RATIO_MAX: f64 = 0.20;
/// Shin share of total height must stay below this for Sitting.
pub const SITTING_SHIN_RATIO_MAX: f64 = 0.25;

const HEIGHT_EPSILON: f64 = 1e-9;

/// Posture of the person in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostureLabel {
    /// No landmarks at all.
    NoPerson,
    Prone,
    Standing,
    Sitting,
    /// Landmarks present but not enough evidence for a posture.
    Unclear,
}

impl fmt::Display for PostureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PostureLabel::NoPerson => "No person",
            PostureLabel::Prone => "Prone",
            PostureLabel::Standing => "Standing",
            PostureLabel::Sitting => "Sitting",
            PostureLabel::Unclear => "Unclear",
        };
        f.write_str(text)
    }
}

/// Decision thresholds, all in normalized image units or height ratios.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    flatness_threshold: f64,
    min_total_height: f64,
    torso_ratio_min: f64,
    standing_segment_ratio_min: f64,
    sitting_thigh_ratio_max: f64,
    sitting_shin_ratio_max: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            flatness_threshold: FLATNESS_THRESHOLD,
            min_total_height: MIN_TOTAL_HEIGHT,
            torso_ratio_min: TORSO_RATIO_MIN,
            standing_segment_ratio_min: STANDING_SEGMENT_RATIO_MIN,
            sitting_thigh_ratio_max: SITTING_THIGH_RATIO_MAX,
            sitting_shin_ratio_max: SITTING_SHIN_RATIO_MAX,
        }
    }
}

impl ClassifierConfig {
    pub fn with_flatness_threshold(mut self, value: f64) -> Self {
        self.flatness_threshold = value;
        self
    }

    pub fn with_min_total_height(mut self, value: f64) -> Self {
        self.min_total_height = value;
        self
    }

    pub fn with_torso_ratio_min(mut self, value: f64) -> Self {
        self.torso_ratio_min = value;
        self
    }

    pub fn with_standing_segment_ratio_min(mut self, value: f64) -> Self {
        self.standing_segment_ratio_min = value;
        self
    }

    pub fn with_sitting_thigh_ratio_max(mut self, value: f64) -> Self {
        self.sitting_thigh_ratio_max = value;
        self
    }

    pub fn with_sitting_shin_ratio_max(mut self, value: f64) -> Self {
        self.sitting_shin_ratio_max = value;
        self
    }

    // Getters
    pub fn flatness_threshold(&self) -> f64 {
        self.flatness_threshold
    }

    pub fn min_total_height(&self) -> f64 {
        self.min_total_height
    }

    pub fn torso_ratio_min(&self) -> f64 {
        self.torso_ratio_min
    }

    pub fn standing_segment_ratio_min(&self) -> f64 {
        self.standing_segment_ratio_min
    }

    pub fn sitting_thigh_ratio_max(&self) -> f64 {
        self.sitting_thigh_ratio_max
    }

    pub fn sitting_shin_ratio_max(&self) -> f64 {
        self.sitting_shin_ratio_max
    }

    /// Named thresholds, for validation and diagnostics.
    pub fn thresholds(&self) -> [(&'static str, f64); 6] {
        [
            ("flatness_threshold", self.flatness_threshold),
            ("min_total_height", self.min_total_height),
            ("torso_ratio_min", self.torso_ratio_min),
            ("standing_segment_ratio_min", self.standing_segment_ratio_min),
            ("sitting_thigh_ratio_max", self.sitting_thigh_ratio_max),
            ("sitting_shin_ratio_max", self.sitting_shin_ratio_max),
        ]
    }
}

/// The eight classification joints of one frame.
struct Body {
    left_shoulder: Vec2<f64>,
    right_shoulder: Vec2<f64>,
    left_hip: Vec2<f64>,
    right_hip: Vec2<f64>,
    left_knee: Vec2<f64>,
    right_knee: Vec2<f64>,
    left_ankle: Vec2<f64>,
    right_ankle: Vec2<f64>,
}

impl Body {
    fn resolve(joints: &JointMap) -> Option<Self> {
        Some(Self {
            left_shoulder: joints.get(JointId::LeftShoulder)?,
            right_shoulder: joints.get(JointId::RightShoulder)?,
            left_hip: joints.get(JointId::LeftHip)?,
            right_hip: joints.get(JointId::RightHip)?,
            left_knee: joints.get(JointId::LeftKnee)?,
            right_knee: joints.get(JointId::RightKnee)?,
            left_ankle: joints.get(JointId::LeftAnkle)?,
            right_ankle: joints.get(JointId::RightAnkle)?,
        })
    }

    fn is_finite(&self) -> bool {
        [
            self.left_shoulder,
            self.right_shoulder,
            self.left_hip,
            self.right_hip,
            self.left_knee,
            self.right_knee,
            self.left_ankle,
            self.right_ankle,
        ]
        .iter()
        .all(|p| p.is_finite())
    }
}

/// Maps a landmark snapshot (normalized coordinates) to a posture label.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one frame. Pure: the result depends only on `snapshot`.
    pub fn classify(&self, snapshot: &Snapshot) -> PostureLabel {
        if snapshot.is_empty() {
            return PostureLabel::NoPerson;
        }

        let joints = JointMap::from_snapshot(snapshot);
        let Some(body) = Body::resolve(&joints) else {
            return PostureLabel::Unclear;
        };
        if !body.is_finite() {
            return PostureLabel::Unclear;
        }

        let cfg = &self.config;

        // the lying test looks at the left side only
        let flat = is_flat(body.left_shoulder, body.left_hip, cfg.flatness_threshold)
            && is_flat(body.left_hip, body.left_knee, cfg.flatness_threshold)
            && is_flat(body.left_knee, body.left_ankle, cfg.flatness_threshold);

        let shoulder_y = midpoint_y(body.left_shoulder, body.right_shoulder);
        let hip_y = midpoint_y(body.left_hip, body.right_hip);
        let knee_y = midpoint_y(body.left_knee, body.right_knee);
        let ankle_y = midpoint_y(body.left_ankle, body.right_ankle);

        let total_height = ankle_y - shoulder_y;
        if flat || total_height < cfg.min_total_height {
            return PostureLabel::Prone;
        }
        if total_height.abs() < HEIGHT_EPSILON {
            return PostureLabel::Unclear;
        }

        let torso = (hip_y - shoulder_y) / total_height;
        let thigh = (knee_y - hip_y) / total_height;
        let shin = (ankle_y - knee_y) / total_height;

        if torso > cfg.torso_ratio_min
            && thigh > cfg.standing_segment_ratio_min
            && shin > cfg.standing_segment_ratio_min
        {
            PostureLabel::Standing
        } else if torso > cfg.torso_ratio_min
            && thigh < cfg.sitting_thigh_ratio_max
            && shin < cfg.sitting_shin_ratio_max
        {
            PostureLabel::Sitting
        } else {
            PostureLabel::Unclear
        }
    }
}

/// Classify with the default thresholds.
pub fn classify(snapshot: &Snapshot) -> PostureLabel {
    Classifier::default().classify(snapshot)
}

/// Signed left-side segment lengths (shoulder-hip, hip-knee, knee-ankle).
/// Useful when tuning thresholds against recordings.
pub fn left_segments(snapshot: &Snapshot) -> Option<[f64; 3]> {
    let joints = JointMap::from_snapshot(snapshot);
    let body = Body::resolve(&joints)?;
    Some([
        vertical_distance(body.left_shoulder, body.left_hip),
        vertical_distance(body.left_hip, body.left_knee),
        vertical_distance(body.left_knee, body.left_ankle),
    ])
}
