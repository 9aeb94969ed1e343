// FFmpeg Locator
// Finds an ffmpeg install without running a conversion

use std::env;
use std::path::Path;
use std::process::Command;

/// Find an ffmpeg executable in PATH or common install locations
///
/// Falls back to the bare binary name when nothing is found, matching the
/// behavior the conversion pipeline expects.
pub fn find_ffmpeg() -> String {
    let lookup = if cfg!(windows) { "where" } else { "which" };
    if let Ok(output) = Command::new(lookup).arg(ffmpeg_binary()).output() {
        if output.status.success() {
            if let Ok(stdout) = String::from_utf8(output.stdout) {
                if let Some(path) = stdout.lines().map(str::trim).find(|line| !line.is_empty()) {
                    return path.to_string();
                }
            }
        }
    }

    for candidate in platform_candidates() {
        if Path::new(&candidate).exists() {
            return candidate;
        }
    }

    ffmpeg_binary().to_string()
}

/// Whether an ffmpeg install could be located on this machine
pub fn ffmpeg_available() -> bool {
    let path = find_ffmpeg();
    if Path::new(&path).is_absolute() && Path::new(&path).exists() {
        return true;
    }

    // Bare name fallback: only available if it actually runs
    Command::new(&path)
        .arg("-version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn ffmpeg_binary() -> &'static str {
    if cfg!(windows) {
        "ffmpeg.exe"
    } else {
        "ffmpeg"
    }
}

fn platform_candidates() -> Vec<String> {
    if cfg!(target_os = "windows") {
        ["ProgramFiles", "ProgramFiles(x86)"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .map(|base| format!("{base}\\ffmpeg\\bin\\ffmpeg.exe"))
            .collect()
    } else if cfg!(target_os = "macos") {
        vec![
            "/opt/homebrew/bin/ffmpeg".to_string(),
            "/usr/local/bin/ffmpeg".to_string(),
        ]
    } else {
        vec![
            "/usr/bin/ffmpeg".to_string(),
            "/usr/local/bin/ffmpeg".to_string(),
        ]
    }
}
