use crate::{common::*, config::DatasetConfig};

/// Extension of YOLO label files.
pub const LABEL_EXTENSION: &str = "txt";

/// Whether an image has a usable label file next to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageLabelStatus {
    pub path: PathBuf,
    pub is_labelled: bool,
}

/// Counts over a scan result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DatasetSummary {
    pub total: usize,
    pub labelled: usize,
}

impl DatasetSummary {
    pub fn new(statuses: &[ImageLabelStatus]) -> Self {
        Self {
            total: statuses.len(),
            labelled: statuses.iter().filter(|status| status.is_labelled).count(),
        }
    }

    pub fn unlabelled(&self) -> usize {
        self.total - self.labelled
    }
}

/// Lists images of a dataset folder with a fixed set of extensions.
#[derive(Debug, Clone)]
pub struct DatasetScanner {
    supported_extensions: HashSet<String>,
}

impl DatasetScanner {
    /// Extensions are given without the leading dot and matched case-insensitively.
    pub fn new<I, S>(supported_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let supported_extensions = supported_extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        Self {
            supported_extensions,
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(&config.supported_extensions)
    }

    /// Report the labelled status of every supported image directly inside `folder_path`.
    ///
    /// A missing path or a path that is not a directory gives an empty list.
    /// The order follows the directory listing and is not stable across
    /// platforms; see [DatasetScanner::scan_sorted].
    pub fn scan(&self, folder_path: impl AsRef<Path>) -> Vec<ImageLabelStatus> {
        let folder_path = folder_path.as_ref();

        if !folder_path.is_dir() {
            debug!(
                "'{}' is not a directory, no images to scan",
                folder_path.display()
            );
            return vec![];
        }

        let entries = match fs::read_dir(folder_path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("unable to list '{}': {}", folder_path.display(), err);
                return vec![];
            }
        };

        // entries that vanish or fail during the listing are skipped
        let statuses: Vec<_> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && self.is_supported(path))
            .map(|path| {
                let is_labelled = is_labelled(&path);
                ImageLabelStatus { path, is_labelled }
            })
            .collect();

        debug!(
            "found {} images in '{}'",
            statuses.len(),
            folder_path.display()
        );

        statuses
    }

    /// Same as [DatasetScanner::scan], ordered by path.
    pub fn scan_sorted(&self, folder_path: impl AsRef<Path>) -> Vec<ImageLabelStatus> {
        self.scan(folder_path)
            .into_iter()
            .sorted_by(|lhs, rhs| lhs.path.cmp(&rhs.path))
            .collect()
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.supported_extensions.contains(&ext)
    }
}

/// Scan `folder_path` for images with one of `supported_extensions`.
pub fn scan<P, I, S>(folder_path: P, supported_extensions: I) -> Vec<ImageLabelStatus>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DatasetScanner::new(supported_extensions).scan(folder_path)
}

/// The label file paired with an image: same folder, same stem, `.txt` extension.
pub fn label_path_for(image_path: impl AsRef<Path>) -> PathBuf {
    image_path.as_ref().with_extension(LABEL_EXTENSION)
}

/// An image is labelled iff its label file exists and is not empty.
pub fn is_labelled(image_path: impl AsRef<Path>) -> bool {
    fs::metadata(label_path_for(image_path))
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}
