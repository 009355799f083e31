pub mod detector;
pub mod detector_config;

pub use detector::{
    Detection, DetectionError, FixedDetector, LabeledDetection, ObjectDetector, ScriptedDetector,
};
pub use detector_config::DetectorConfig;
