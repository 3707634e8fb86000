use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const STATS_FILE: &str = ".vigil_stats.json";

/// Cumulative scan statistics, persisted as `.vigil_stats.json` in the
/// scanned project. Saving is best-effort; the scan result never depends on
/// whether the stats file could be written.
#[derive(Serialize, Deserialize, Default)]
pub struct VigilStats {
    pub total_scans: u32,
    pub files_scanned: u32,
    pub issues_found: u32,
}

impl VigilStats {
    pub fn load(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path.join(STATS_FILE)) {
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    pub fn save(&self, path: &Path) {
        if let Ok(content) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path.join(STATS_FILE), content);
        }
    }

    pub fn record_scan(&mut self, files: usize, issues: usize) {
        self.total_scans += 1;
        self.files_scanned += files as u32;
        self.issues_found += issues as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let stats = VigilStats::load(dir.path());
        assert_eq!(stats.total_scans, 0);
        assert_eq!(stats.issues_found, 0);
    }

    #[test]
    fn test_record_and_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut stats = VigilStats::load(dir.path());
        stats.record_scan(3, 7);
        stats.save(dir.path());

        let loaded = VigilStats::load(dir.path());
        assert_eq!(loaded.total_scans, 1);
        assert_eq!(loaded.files_scanned, 3);
        assert_eq!(loaded.issues_found, 7);
    }
}
