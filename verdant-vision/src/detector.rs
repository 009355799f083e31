use async_trait::async_trait;

use crate::detector_config::DetectorConfig;

/// Result of running object detection over a bin image
#[derive(Debug, Clone)]
pub struct Detection {
    /// Number of target objects found
    pub count: u32,
    /// Rendered image with detection overlays, passed through for display
    pub annotated_image: Vec<u8>,
}

/// Capability interface for the external detection backend.
///
/// The reconciliation core consumes only the count; which model or library
/// produces it is the backend's concern.
#[async_trait]
pub trait ObjectDetector: Send + Sync {
    async fn detect(&self, image_bytes: &[u8]) -> Result<Detection, DetectionError>;
}

/// Deterministic detector returning a fixed count, for tests and local wiring
pub struct FixedDetector {
    count: u32,
}

impl FixedDetector {
    pub fn new(count: u32) -> Self {
        Self { count }
    }
}

#[async_trait]
impl ObjectDetector for FixedDetector {
    async fn detect(&self, image_bytes: &[u8]) -> Result<Detection, DetectionError> {
        if image_bytes.is_empty() {
            return Err(DetectionError::EmptyImage);
        }

        Ok(Detection {
            count: self.count,
            annotated_image: image_bytes.to_vec(),
        })
    }
}

/// A raw detection as a backend would report it, before filtering
#[derive(Debug, Clone)]
pub struct LabeledDetection {
    pub class_name: String,
    pub confidence: f64,
}

/// Scripted backend that replays canned detections through the same
/// confidence/class filtering a real model backend applies.
pub struct ScriptedDetector {
    detections: Vec<LabeledDetection>,
    config: DetectorConfig,
}

impl ScriptedDetector {
    pub fn new(detections: Vec<LabeledDetection>, config: DetectorConfig) -> Self {
        Self { detections, config }
    }

    fn is_counted(&self, detection: &LabeledDetection) -> bool {
        if detection.confidence < self.config.confidence_threshold {
            return false;
        }
        match &self.config.target_classes {
            Some(classes) => classes.contains(&detection.class_name),
            None => true,
        }
    }
}

#[async_trait]
impl ObjectDetector for ScriptedDetector {
    async fn detect(&self, image_bytes: &[u8]) -> Result<Detection, DetectionError> {
        if image_bytes.is_empty() {
            return Err(DetectionError::EmptyImage);
        }

        let count = self.detections.iter().filter(|d| self.is_counted(d)).count() as u32;

        Ok(Detection {
            count,
            annotated_image: image_bytes.to_vec(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Empty image payload")]
    EmptyImage,

    #[error("Could not decode image: {0}")]
    InvalidImage(String),

    #[error("Detection backend failed: {0}")]
    Backend(String),
}
