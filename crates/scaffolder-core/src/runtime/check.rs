//! Detection of the external tools the scaffolder shells out to

use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    fn detect(name: &'static str, binary: &str) -> Self {
        let output = Command::new(binary).arg("--version").output();

        match output {
            Ok(out) if out.status.success() => {
                let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
                RuntimeInfo {
                    name,
                    version: Some(version),
                    available: true,
                }
            }
            _ => RuntimeInfo {
                name,
                version: None,
                available: false,
            },
        }
    }
}

/// Check if git is available
pub fn check_git() -> RuntimeInfo {
    RuntimeInfo::detect("Git", "git")
}
