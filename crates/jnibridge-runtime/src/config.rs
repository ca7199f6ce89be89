use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BridgeError;
use crate::options::VmOptions;
use crate::version::JniVersion;

/// On-disk VM configuration.
///
/// ```toml
/// library = "/usr/lib/jvm/java-17/lib/server/libjvm.so"
/// version = "1.8"
/// options = ["-Xmx256m"]
///
/// [paths]
/// class_path = [".", "lib/app.jar"]
/// library_path = ["native"]
/// ```
#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    /// VM library to load; the platform default name when absent.
    pub library: Option<PathBuf>,
    #[serde(default)]
    pub version: JniVersion,
    #[serde(default = "default_ignore_unrecognized")]
    pub ignore_unrecognized: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct PathsConfig {
    #[serde(default)]
    pub class_path: Vec<String>,
    #[serde(default)]
    pub library_path: Vec<String>,
}

fn default_ignore_unrecognized() -> bool {
    true
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            library: None,
            version: JniVersion::default(),
            ignore_unrecognized: default_ignore_unrecognized(),
            options: Vec::new(),
            paths: PathsConfig::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jnibridge")
            .join("runtime.toml")
    }

    pub fn from_file(path: &Path) -> Result<Self, BridgeError> {
        let content = std::fs::read_to_string(path).map_err(|e| BridgeError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|reason| BridgeError::Config {
            path: path.display().to_string(),
            reason,
        })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn to_vm_options(&self) -> VmOptions {
        VmOptions {
            class_path: self.paths.class_path.clone(),
            library_path: self.paths.library_path.clone(),
            options: self.options.clone(),
            version: self.version,
            ignore_unrecognized: self.ignore_unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_empty_config() {
        let config = RuntimeConfig::parse("").unwrap();
        assert!(config.library.is_none());
        assert_eq!(config.version, JniVersion::V1_2);
        assert!(config.ignore_unrecognized);
        assert_eq!(
            config.to_vm_options().option_strings(),
            vec!["-Djava.class.path=."]
        );
    }

    #[test]
    fn parses_full_config() {
        let toml_str = r#"
library = "/opt/jdk/lib/server/libjvm.so"
version = "1.8"
ignore_unrecognized = false
options = ["-Xmx256m", ""]

[paths]
class_path = ["app.jar"]
library_path = ["native"]
"#;
        let config = RuntimeConfig::parse(toml_str).unwrap();
        assert_eq!(config.library, Some(PathBuf::from("/opt/jdk/lib/server/libjvm.so")));
        assert_eq!(config.version, JniVersion::V1_8);
        assert!(!config.ignore_unrecognized);

        let options = config.to_vm_options();
        assert!(!options.ignore_unrecognized);
        assert_eq!(
            options.option_strings(),
            vec![
                "-Djava.class.path=app.jar",
                "-Djava.library.path=native",
                "-Xmx256m",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn class_path_entry_may_list_several_jars() {
        let config = RuntimeConfig::parse(
            r#"
[paths]
class_path = ["lib/a.jar:lib/b.jar", "classes"]
"#,
        )
        .unwrap();
        assert_eq!(
            config.to_vm_options().option_strings(),
            vec!["-Djava.class.path=lib/a.jar:lib/b.jar:classes"]
        );
    }

    #[test]
    fn rejects_unknown_version() {
        let err = RuntimeConfig::parse(r#"version = "1.9""#).unwrap_err();
        assert!(err.contains("1.9"));
    }

    #[test]
    fn from_file_names_the_file_on_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "options = 42").unwrap();
        let err = RuntimeConfig::from_file(file.path()).unwrap_err();
        match err {
            BridgeError::Config { path, .. } => {
                assert_eq!(path, file.path().display().to_string())
            }
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "options = [\"-Xint\"]").unwrap();
        let config = RuntimeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.options, vec!["-Xint"]);
    }

    #[test]
    fn default_path_ends_with_runtime_toml() {
        assert!(RuntimeConfig::default_path().ends_with("jnibridge/runtime.toml"));
    }
}
