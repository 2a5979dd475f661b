//! Annotation tool configuration format.

use crate::common::*;

pub use dataset::*;
pub use detection::*;

/// The main configuration. Every field has a default, so `{}` is a valid
/// configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

mod dataset {
    use super::*;

    /// Dataset folder options.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct DatasetConfig {
        /// Image file extensions without the leading dot. Matched case-insensitively.
        #[serde(default = "default_supported_extensions")]
        pub supported_extensions: IndexSet<String>,
        /// The class list file, relative to the dataset folder.
        #[serde(default = "default_classes_file")]
        pub classes_file: PathBuf,
    }

    impl Default for DatasetConfig {
        fn default() -> Self {
            Self {
                supported_extensions: default_supported_extensions(),
                classes_file: default_classes_file(),
            }
        }
    }

    fn default_supported_extensions() -> IndexSet<String> {
        [
            "bmp", "gif", "jpeg", "jpg", "pbm", "pgm", "png", "ppm", "tif", "tiff", "webp",
        ]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
    }

    fn default_classes_file() -> PathBuf {
        PathBuf::from("labels.json")
    }
}

mod detection {
    use super::*;

    /// Detector output options.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct DetectionConfig {
        /// Detections must score strictly above this value to be kept.
        #[serde(default = "default_confidence_threshold")]
        pub confidence_threshold: R64,
    }

    impl Default for DetectionConfig {
        fn default() -> Self {
            Self {
                confidence_threshold: default_confidence_threshold(),
            }
        }
    }

    fn default_confidence_threshold() -> R64 {
        r64(0.5)
    }
}
