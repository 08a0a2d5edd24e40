use {
    crate::{
        PostureError,
        classifier::ClassifierConfig,
        overlay::OverlayStyle,
        smoother::DEFAULT_MIN_INTERVAL_MS,
    },
    log::warn,
    serde::{Deserialize, Serialize},
    std::{fs, path::Path},
};

/// Settings for a posture session.
///
/// Every field has a default, so a config file only needs the values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostureConfig {
    classifier: ClassifierConfig,
    min_interval_ms: u64,
    overlay: OverlayStyle,
}

impl Default for PostureConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
            overlay: OverlayStyle::default(),
        }
    }
}

impl PostureConfig {
    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the minimum time between two announced labels.
    pub fn with_min_interval_ms(mut self, min_interval_ms: u64) -> Self {
        self.min_interval_ms = min_interval_ms;
        self
    }

    pub fn with_overlay(mut self, overlay: OverlayStyle) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn classifier(&self) -> &ClassifierConfig {
        &self.classifier
    }

    pub fn min_interval_ms(&self) -> u64 {
        self.min_interval_ms
    }

    pub fn overlay(&self) -> &OverlayStyle {
        &self.overlay
    }

    /// Thresholds and overlay sizes must be finite and positive.
    pub fn validate(&self) -> Result<(), PostureError> {
        for (name, value) in self.classifier.thresholds() {
            if !value.is_finite() || value <= 0.0 {
                return Err(PostureError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let style = &self.overlay;
        if !(style.point_radius.is_finite() && style.point_radius > 0.0) {
            return Err(PostureError::InvalidConfig(format!(
                "point_radius must be a positive number, got {}",
                style.point_radius
            )));
        }
        if !(style.stroke_width.is_finite() && style.stroke_width > 0.0) {
            return Err(PostureError::InvalidConfig(format!(
                "stroke_width must be a positive number, got {}",
                style.stroke_width
            )));
        }
        if self.min_interval_ms == 0 {
            warn!("min_interval_ms is 0, every label change will be announced");
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, PostureError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PostureError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PostureError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
