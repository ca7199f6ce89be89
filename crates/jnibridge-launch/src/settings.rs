use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use jnibridge_runtime::{JniVersion, RuntimeConfig, VmOptions};

/// VM flags shared by every subcommand. Each one overrides the config file.
#[derive(Debug, Default, Args)]
pub struct VmArgs {
    /// Config file [default: <config dir>/jnibridge/runtime.toml, if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// VM library to load instead of the configured or platform default one
    #[arg(long, global = true)]
    pub jvm: Option<PathBuf>,

    /// Class path entry; replaces the configured class path (repeatable)
    #[arg(long = "class-path", visible_alias = "cp", global = true)]
    pub class_path: Vec<String>,

    /// Native library path entry; replaces the configured one (repeatable)
    #[arg(long = "library-path", global = true)]
    pub library_path: Vec<String>,

    /// Extra VM option, appended after the configured ones (repeatable)
    #[arg(short = 'X', long = "option", global = true, allow_hyphen_values = true)]
    pub options: Vec<String>,

    /// JNI version to request, e.g. 1.8 or 21
    #[arg(long, global = true)]
    pub jni_version: Option<JniVersion>,
}

/// Everything needed to start the VM.
#[derive(Debug)]
pub struct Settings {
    pub library: Option<PathBuf>,
    pub vm: VmOptions,
}

impl Settings {
    /// Load the config file, then apply the command-line overrides.
    ///
    /// An explicit `--config` must exist. The default location is optional.
    pub fn resolve(args: &VmArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => RuntimeConfig::from_file(path)?,
            None => load_default(&RuntimeConfig::default_path())?,
        };
        Ok(Self::merge(config, args))
    }

    fn merge(config: RuntimeConfig, args: &VmArgs) -> Self {
        let mut vm = config.to_vm_options();
        if !args.class_path.is_empty() {
            vm.class_path = args.class_path.clone();
        }
        if !args.library_path.is_empty() {
            vm.library_path = args.library_path.clone();
        }
        vm.options.extend(args.options.iter().cloned());
        if let Some(version) = args.jni_version {
            vm.version = version;
        }

        Self {
            library: args.jvm.clone().or(config.library),
            vm,
        }
    }
}

fn load_default(path: &Path) -> Result<RuntimeConfig> {
    if !path.exists() {
        tracing::debug!(config = %path.display(), "No config file; using defaults");
        return Ok(RuntimeConfig::default());
    }
    tracing::info!(config = %path.display(), "Loading VM config");
    Ok(RuntimeConfig::from_file(path)?)
}
