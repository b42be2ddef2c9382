//! Output directory layout and dated file names.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::IoError;

/// Where a pipeline run writes its tables.
///
/// Intermediate source data goes to `data_dir`, per-reach maps to
/// `output_dir` and the statistics summary to `results_dir`. Every file name
/// carries the run stamp (`YYYYMMDD` by default).
///
/// # Example
///
/// ```
/// use floodrisk_io::OutputLayout;
///
/// let layout = OutputLayout::new("/tmp/run").with_stamp("20250101");
/// assert!(layout.risk_map_path().ends_with("output/flood_risk_map_20250101.csv"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OutputLayout {
    data_dir: PathBuf,
    output_dir: PathBuf,
    results_dir: PathBuf,
    stamp: String,
}

impl OutputLayout {
    /// Layout rooted at `root` (`root/data`, `root/output`, `root/results`)
    /// stamped with today's local date.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            data_dir: root.join("data"),
            output_dir: root.join("output"),
            results_dir: root.join("results"),
            stamp: chrono::Local::now().format("%Y%m%d").to_string(),
        }
    }

    /// Override the file-name stamp.
    pub fn with_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.stamp = stamp.into();
        self
    }

    /// Override the directory for source data.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Override the directory for per-reach maps.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Override the directory for the statistics summary.
    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    /// Validate the layout.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the stamp is empty or contains a
    /// path separator.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.stamp.is_empty() || self.stamp.contains(['/', '\\']) {
            return Err(IoError::Validation {
                count: 1,
                details: format!("invalid file stamp '{}'", self.stamp),
            });
        }
        Ok(())
    }

    /// Create all three directories (and their parents).
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] if a directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), IoError> {
        self.validate()?;
        for dir in [&self.data_dir, &self.output_dir, &self.results_dir] {
            std::fs::create_dir_all(dir).map_err(|e| IoError::io(dir, e))?;
            debug!(dir = %dir.display(), "output directory ready");
        }
        Ok(())
    }

    /// `data/nwm_max_discharge_<stamp>.csv`
    pub fn discharge_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("nwm_max_discharge_{}.csv", self.stamp))
    }

    /// `output/fim_depth_map_<stamp>.csv`
    pub fn depth_map_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("fim_depth_map_{}.csv", self.stamp))
    }

    /// `output/svi_data_<stamp>.csv`
    pub fn vulnerability_path(&self) -> PathBuf {
        self.output_dir.join(format!("svi_data_{}.csv", self.stamp))
    }

    /// `output/flood_risk_map_<stamp>.csv`
    pub fn risk_map_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("flood_risk_map_{}.csv", self.stamp))
    }

    /// `results/risk_statistics_<stamp>.json`
    pub fn statistics_path(&self) -> PathBuf {
        self.results_dir
            .join(format!("risk_statistics_{}.json", self.stamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stamp_is_eight_digits() {
        let layout = OutputLayout::new("root");
        assert_eq!(layout.stamp().len(), 8);
        assert!(layout.stamp().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn file_names() {
        let layout = OutputLayout::new("root").with_stamp("20240315");
        assert_eq!(
            layout.discharge_path(),
            Path::new("root/data/nwm_max_discharge_20240315.csv")
        );
        assert_eq!(
            layout.depth_map_path(),
            Path::new("root/output/fim_depth_map_20240315.csv")
        );
        assert_eq!(
            layout.vulnerability_path(),
            Path::new("root/output/svi_data_20240315.csv")
        );
        assert_eq!(
            layout.risk_map_path(),
            Path::new("root/output/flood_risk_map_20240315.csv")
        );
        assert_eq!(
            layout.statistics_path(),
            Path::new("root/results/risk_statistics_20240315.json")
        );
    }

    #[test]
    fn directory_overrides() {
        let layout = OutputLayout::new("root")
            .with_data_dir("raw")
            .with_output_dir("maps")
            .with_results_dir("summary");
        assert_eq!(layout.data_dir(), Path::new("raw"));
        assert_eq!(layout.output_dir(), Path::new("maps"));
        assert_eq!(layout.results_dir(), Path::new("summary"));
    }

    #[test]
    fn validate_rejects_bad_stamp() {
        assert!(OutputLayout::new("r").with_stamp("").validate().is_err());
        assert!(OutputLayout::new("r").with_stamp("a/b").validate().is_err());
        assert!(OutputLayout::new("r").with_stamp("run-7").validate().is_ok());
    }
}
