use {
    posture_base::Vec2,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Number of joints the engine knows about.
pub const JOINT_COUNT: usize = 12;

/// Body joints consumed by the classifier and the overlay.
///
/// Elbows and wrists are only drawn, never classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointId {
    LeftShoulder = 0,
    RightShoulder = 1,
    LeftHip = 2,
    RightHip = 3,
    LeftKnee = 4,
    RightKnee = 5,
    LeftAnkle = 6,
    RightAnkle = 7,
    LeftElbow = 8,
    RightElbow = 9,
    LeftWrist = 10,
    RightWrist = 11,
}

impl JointId {
    pub const ALL: [JointId; JOINT_COUNT] = [
        JointId::LeftShoulder,
        JointId::RightShoulder,
        JointId::LeftHip,
        JointId::RightHip,
        JointId::LeftKnee,
        JointId::RightKnee,
        JointId::LeftAnkle,
        JointId::RightAnkle,
        JointId::LeftElbow,
        JointId::RightElbow,
        JointId::LeftWrist,
        JointId::RightWrist,
    ];

    /// The eight joints every classification needs.
    pub const REQUIRED: [JointId; 8] = [
        JointId::LeftShoulder,
        JointId::RightShoulder,
        JointId::LeftHip,
        JointId::RightHip,
        JointId::LeftKnee,
        JointId::RightKnee,
        JointId::LeftAnkle,
        JointId::RightAnkle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            JointId::LeftShoulder => "left_shoulder",
            JointId::RightShoulder => "right_shoulder",
            JointId::LeftHip => "left_hip",
            JointId::RightHip => "right_hip",
            JointId::LeftKnee => "left_knee",
            JointId::RightKnee => "right_knee",
            JointId::LeftAnkle => "left_ankle",
            JointId::RightAnkle => "right_ankle",
            JointId::LeftElbow => "left_elbow",
            JointId::RightElbow => "right_elbow",
            JointId::LeftWrist => "left_wrist",
            JointId::RightWrist => "right_wrist",
        }
    }

    pub fn is_required(self) -> bool {
        (self as usize) < JointId::REQUIRED.len()
    }
}

impl From<JointId> for usize {
    fn from(id: JointId) -> usize {
        id as usize
    }
}

impl TryFrom<usize> for JointId {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        JointId::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid joint index: {}. Must be in range 0-{}.",
                value,
                JOINT_COUNT - 1
            )
        })
    }
}

impl FromStr for JointId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JointId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| format!("Unknown joint name: {s}"))
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single detected joint.
///
/// `position` is either normalized to the detector input (classifier) or in
/// source-image pixels (overlay); the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: JointId,
    #[serde(flatten)]
    pub position: Vec2<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    pub fn new(id: JointId, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
            visibility: None,
        }
    }

    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

/// All landmarks detected in one frame, in detector order. Ids may repeat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    landmarks: Vec<Landmark>,
}

impl Snapshot {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, landmark: Landmark) {
        self.landmarks.push(landmark);
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Convert normalized coordinates to pixels of a `width` x `height` image.
    pub fn denormalized(&self, width: u32, height: u32) -> Snapshot {
        let size = Vec2::new(width as f64, height as f64);
        Snapshot {
            landmarks: self
                .landmarks
                .iter()
                .map(|lm| Landmark {
                    position: lm.position * size,
                    ..*lm
                })
                .collect(),
        }
    }
}

impl From<Vec<Landmark>> for Snapshot {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

impl FromIterator<Landmark> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.landmarks.iter()
    }
}

/// Per-frame lookup from joint to position.
///
/// When a snapshot carries the same joint more than once, the first entry in
/// snapshot order wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JointMap {
    slots: [Option<Vec2<f64>>; JOINT_COUNT],
}

impl JointMap {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut slots = [None; JOINT_COUNT];
        for lm in snapshot {
            let slot = &mut slots[usize::from(lm.id)];
            if slot.is_none() {
                *slot = Some(lm.position);
            }
        }
        Self { slots }
    }

    pub fn get(&self, id: JointId) -> Option<Vec2<f64>> {
        self.slots[usize::from(id)]
    }

    pub fn contains(&self, id: JointId) -> bool {
        self.get(id).is_some()
    }

    /// Joints from `JointId::REQUIRED` that are absent.
    pub fn missing_required(&self) -> Vec<JointId> {
        JointId::REQUIRED
            .iter()
            .copied()
            .filter(|id| !self.contains(*id))
            .collect()
    }
}
