use std::path::PathBuf;

pub const MODEL_PATH_ENV: &str = "AIR_MODEL_PATH";
pub const CAMERA_DEVICE_ENV: &str = "AIR_CAMERA_DEVICE";
pub const EXPORT_PATH_ENV: &str = "AIR_EXPORT_PATH";
pub const LOG_DIR_ENV: &str = "AIR_LOG_DIR";

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model_path: PathBuf,
    pub camera_device: String,
    pub export_path: PathBuf,
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            model_path: get(MODEL_PATH_ENV)
                .unwrap_or_else(|| "models/hand_landmark.onnx".to_string())
                .into(),
            camera_device: get(CAMERA_DEVICE_ENV).unwrap_or_else(|| "/dev/video0".to_string()),
            export_path: get(EXPORT_PATH_ENV)
                .unwrap_or_else(|| "drawing.png".to_string())
                .into(),
            log_dir: get(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}
