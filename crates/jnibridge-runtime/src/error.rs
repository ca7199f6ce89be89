use jni_sys::jint;
use thiserror::Error;

use crate::version::JniVersion;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("could not open runtime library {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("could not find symbol {symbol} in {path}")]
    Symbol { symbol: &'static str, path: String },

    #[error("JNI_CreateJavaVM returned {status}")]
    Create { status: jint },

    #[error("JNI version {requested} is not supported by the runtime")]
    UnsupportedVersion { requested: JniVersion },

    #[error("can't attach current thread (status {status})")]
    Attach { status: jint },

    #[error("can't detach current thread (status {status})")]
    Detach { status: jint },

    #[error("DestroyJavaVM returned {status}")]
    Destroy { status: jint },

    #[error("the Java VM has already been destroyed")]
    Destroyed,

    #[error("invalid VM option {option:?}: {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("runtime function table has no {0} entry")]
    MissingFunction(&'static str),

    #[error("config error in {path}: {reason}")]
    Config { path: String, reason: String },
}

impl BridgeError {
    /// The runtime's own status code, for failures the runtime reported.
    pub fn runtime_status(&self) -> Option<jint> {
        match self {
            BridgeError::Create { status }
            | BridgeError::Attach { status }
            | BridgeError::Detach { status }
            | BridgeError::Destroy { status } => Some(*status),
            BridgeError::UnsupportedVersion { .. } => Some(jni_sys::JNI_EVERSION),
            _ => None,
        }
    }
}
