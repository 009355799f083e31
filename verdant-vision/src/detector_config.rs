use serde::Deserialize;

/// Detection backend tuning.
///
/// Production backends should fine-tune on real product images and count only
/// the target classes; `target_classes = None` counts every detection.
#[derive(Debug, Deserialize, Clone)]
pub struct DetectorConfig {
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    #[serde(default)]
    pub target_classes: Option<Vec<String>>,
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

fn default_confidence_threshold() -> f64 {
    0.25
}

fn default_model_name() -> String {
    "yolov5s".to_string()
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            target_classes: None,
            model_name: default_model_name(),
        }
    }
}

impl DetectorConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            // Optional file, env vars override. Eg. `VERDANT_DETECTOR__MODEL_NAME=yolov5m`
            .add_source(config::File::with_name("config/detector").required(false))
            .add_source(config::Environment::with_prefix("VERDANT_DETECTOR").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.confidence_threshold, 0.25);
        assert_eq!(config.model_name, "yolov5s");
        assert!(config.target_classes.is_none());
    }
}
