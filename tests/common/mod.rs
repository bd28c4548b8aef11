//! Fake Android SDK for integration tests
//!
//! Builds an SDK root whose `sdkmanager` and `avdmanager` are small shell
//! scripts that record their calls next to the files they touch.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use avd_wizard::toolchain::EnvironmentConfig;
use tempfile::TempDir;

/// Behavior knobs for the fake tools
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeTools {
    pub install_fails: bool,
    pub create_fails: bool,
    /// avdmanager succeeds but leaves no config.ini behind
    pub skip_config_file: bool,
    /// Install the tools under `cmdline-tools/<version>` instead of `latest`
    pub cmdline_tools_version: Option<&'static str>,
}

pub struct FakeSdk {
    pub dir: TempDir,
}

impl FakeSdk {
    pub fn new(tools: FakeTools) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir
            .path()
            .join("cmdline-tools")
            .join(tools.cmdline_tools_version.unwrap_or("latest"))
            .join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::create_dir_all(dir.path().join("avd")).unwrap();

        let install = if tools.install_fails {
            "echo \"install $2\" >> \"$ANDROID_SDK_ROOT/calls.log\"; exit 1"
        } else {
            "echo \"install $2\" >> \"$ANDROID_SDK_ROOT/calls.log\"; echo \"$2\" >> \"$ANDROID_SDK_ROOT/installed.txt\"; echo \"Installing $2\""
        };
        let sdkmanager = format!(
            r#"#!/bin/sh
case "$1" in
  --list_installed)
    echo "list" >> "$ANDROID_SDK_ROOT/calls.log"
    echo "Installed packages:"
    cat "$ANDROID_SDK_ROOT/installed.txt" 2>/dev/null
    ;;
  --install)
    {install}
    ;;
esac
exit 0
"#
        );
        write_script(&bin.join("sdkmanager"), &sdkmanager);

        let create = if tools.create_fails {
            "exit 1".to_string()
        } else if tools.skip_config_file {
            "mkdir -p \"$ANDROID_AVD_HOME/$name.avd\"".to_string()
        } else {
            "mkdir -p \"$ANDROID_AVD_HOME/$name.avd\"\nprintf 'avd.ini.encoding=UTF-8\\nhw.ramSize=1536\\n' > \"$ANDROID_AVD_HOME/$name.avd/config.ini\"".to_string()
        };
        let avdmanager = format!(
            r#"#!/bin/sh
read answer
echo "$answer" > "$ANDROID_AVD_HOME/answer.txt"
echo "$@" >> "$ANDROID_AVD_HOME/calls.log"
name=""
while [ $# -gt 0 ]; do
  case "$1" in
    --name) name="$2"; shift ;;
  esac
  shift
done
{create}
exit 0
"#
        );
        write_script(&bin.join("avdmanager"), &avdmanager);

        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn avd_home(&self) -> PathBuf {
        self.dir.path().join("avd")
    }

    pub fn env(&self) -> EnvironmentConfig {
        EnvironmentConfig {
            android_home: self.root().to_path_buf(),
            avd_home: self.avd_home(),
        }
    }

    pub fn mark_installed(&self, package: &str) {
        fs::write(self.root().join("installed.txt"), format!("{}\n", package)).unwrap();
    }

    pub fn sdk_calls(&self) -> String {
        fs::read_to_string(self.root().join("calls.log")).unwrap_or_default()
    }

    pub fn avd_calls(&self) -> String {
        fs::read_to_string(self.avd_home().join("calls.log")).unwrap_or_default()
    }

    pub fn avd_answer(&self) -> String {
        fs::read_to_string(self.avd_home().join("answer.txt")).unwrap_or_default()
    }

    pub fn config_ini(&self, name: &str) -> String {
        fs::read_to_string(self.avd_home().join(format!("{}.avd", name)).join("config.ini"))
            .unwrap_or_default()
    }
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
