// Log Manager
// Retention cleanup and tail reads for the app log directory

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const LOG_EXTENSION: &str = "log";
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Delete log files older than the retention window
///
/// A retention of 0 days disables pruning. Returns how many files were
/// removed.
pub fn prune_logs(log_dir: &Path, retention_days: u32) -> Result<usize, String> {
    if retention_days == 0 || !log_dir.exists() {
        return Ok(0);
    }

    let cutoff = SystemTime::now()
        .checked_sub(Duration::from_secs(u64::from(retention_days) * SECONDS_PER_DAY))
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let entries = fs::read_dir(log_dir).map_err(|e| format!("Failed to read log dir: {e}"))?;
    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if !is_log_file(&path) {
            continue;
        }
        if modified_time(&entry) < cutoff && fs::remove_file(&path).is_ok() {
            log::debug!("Pruned expired log file {:?}", path);
            removed += 1;
        }
    }

    Ok(removed)
}

/// Read up to `max_lines` from the end of the most recent log file
///
/// Returns an empty list when no log file exists yet. Blank lines are
/// skipped.
pub fn read_recent_logs(log_dir: &Path, max_lines: usize) -> Result<Vec<String>, String> {
    let Some(log_file) = latest_log_file(log_dir) else {
        return Ok(Vec::new());
    };

    let bytes = fs::read(&log_file).map_err(|e| format!("Failed to read log file: {e}"))?;
    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    let start = lines.len().saturating_sub(max_lines);
    Ok(lines[start..].to_vec())
}

fn latest_log_file(log_dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(log_dir).ok()?;
    entries
        .flatten()
        .filter(|entry| is_log_file(&entry.path()))
        .max_by_key(modified_time)
        .map(|entry| entry.path())
}

fn is_log_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(LOG_EXTENSION)
}

fn modified_time(entry: &fs::DirEntry) -> SystemTime {
    entry
        .metadata()
        .and_then(|metadata| metadata.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
