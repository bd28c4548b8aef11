//! SDK command-line tools
//!
//! Locates `sdkmanager` and `avdmanager` under an SDK root. Both tools are
//! resolved the same way so a run never mixes two cmdline-tools installs.

use std::path::{Path, PathBuf};

pub const SDKMANAGER: &str = "sdkmanager";
pub const AVDMANAGER: &str = "avdmanager";

/// File name of `tool` on this platform
pub fn tool_file_name(tool: &str) -> String {
    if cfg!(windows) {
        format!("{}.bat", tool)
    } else {
        tool.to_string()
    }
}

/// `<sdk_root>/cmdline-tools/latest/bin/<tool>`
pub fn latest_tool_path(sdk_root: &Path, tool: &str) -> PathBuf {
    sdk_root
        .join("cmdline-tools")
        .join("latest")
        .join("bin")
        .join(tool_file_name(tool))
}

/// Find an existing `tool`.
///
/// `cmdline-tools/latest` wins; otherwise the highest versioned
/// `cmdline-tools/<version>/bin` that contains the tool is used.
pub fn find_cmdline_tool(sdk_root: &Path, tool: &str) -> Option<PathBuf> {
    let latest = latest_tool_path(sdk_root, tool);
    if latest.exists() {
        return Some(latest);
    }

    let file_name = tool_file_name(tool);
    let mut versioned: Vec<PathBuf> = std::fs::read_dir(sdk_root.join("cmdline-tools"))
        .ok()?
        .flatten()
        .map(|entry| entry.path().join("bin").join(&file_name))
        .filter(|path| path.exists())
        .collect();
    versioned.sort();
    versioned.pop()
}

/// Path a run would use for `tool`, falling back to the `latest` location
/// when nothing is installed yet
pub fn cmdline_tool_path(sdk_root: &Path, tool: &str) -> PathBuf {
    find_cmdline_tool(sdk_root, tool).unwrap_or_else(|| latest_tool_path(sdk_root, tool))
}
