use std::path::PathBuf;

/// Environment variable pointing at a replacement base table.
pub const DATASET_ENV_VAR: &str = "BASE_TVS_FILE";
pub const DATASET_FILE_NAME: &str = "base_tvs.json";

/// Base table bundled with the crate.
pub const EMBEDDED_DATASET: &str = include_str!("../data/base_tvs.json");

pub const DEFAULT_CEILING_HEIGHT_M: f64 = 2.8;
/// Screen centre sits this far above the viewer's eye line.
pub const SCREEN_MOUNT_OFFSET_M: f64 = 0.3;
pub const ASPECT_WIDTH: f64 = 16.0;
pub const ASPECT_HEIGHT: f64 = 9.0;
pub const METERS_PER_INCH: f64 = 0.0254;

/// Distances used to build the recommendation example grid.
pub const SAMPLE_DISTANCES_M: [f64; 11] = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0, 6.0, 8.0, 10.0];

pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("visionspec")
}

pub fn get_dataset_file_path() -> PathBuf {
    get_config_dir().join(DATASET_FILE_NAME)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    /// Replacement table on disk; `None` means the embedded one.
    pub dataset_path: Option<PathBuf>,
}

impl EngineConfig {
    pub fn with_dataset_path(path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: Some(path.into()),
        }
    }

    /// Resolve the dataset location: env override, then the user config
    /// directory, then the embedded table.
    pub fn from_env() -> Self {
        if let Some(path) = std::env::var_os(DATASET_ENV_VAR).filter(|v| !v.is_empty()) {
            return Self::with_dataset_path(path);
        }

        let user_file = get_dataset_file_path();
        if user_file.is_file() {
            return Self::with_dataset_path(user_file);
        }

        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_embedded_dataset() {
        assert_eq!(EngineConfig::default().dataset_path, None);
    }

    #[test]
    fn test_config_dir_is_namespaced() {
        assert!(get_dataset_file_path().ends_with("visionspec/base_tvs.json"));
    }

    #[test]
    fn test_sample_distances_ascending() {
        assert!(SAMPLE_DISTANCES_M.windows(2).all(|w| w[0] < w[1]));
    }
}
