use std::fmt;
use std::str::FromStr;

use jni_sys::jint;
use serde::Deserialize;

/// A JNI interface version tag, as passed to `JNI_CreateJavaVM` and `GetEnv`.
///
/// Versions up to 1.8 are encoded `0x0001_000N`; from 9 onwards the major
/// version sits in the high half-word (`0x0009_0000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct JniVersion(jint);

impl JniVersion {
    pub const V1_1: JniVersion = JniVersion(0x0001_0001);
    pub const V1_2: JniVersion = JniVersion(0x0001_0002);
    pub const V1_4: JniVersion = JniVersion(0x0001_0004);
    pub const V1_6: JniVersion = JniVersion(0x0001_0006);
    pub const V1_8: JniVersion = JniVersion(0x0001_0008);
    pub const V9: JniVersion = JniVersion(0x0009_0000);
    pub const V10: JniVersion = JniVersion(0x000a_0000);
    pub const V19: JniVersion = JniVersion(0x0013_0000);
    pub const V21: JniVersion = JniVersion(0x0015_0000);

    pub const fn from_raw(raw: jint) -> Self {
        JniVersion(raw)
    }

    pub const fn raw(self) -> jint {
        self.0
    }

    pub const fn major(self) -> jint {
        self.0 >> 16
    }

    pub const fn minor(self) -> jint {
        self.0 & 0xffff
    }
}

impl Default for JniVersion {
    fn default() -> Self {
        JniVersion::V1_2
    }
}

impl fmt::Display for JniVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.major() == 1 {
            write!(f, "1.{}", self.minor())
        } else if self.minor() == 0 {
            write!(f, "{}", self.major())
        } else {
            write!(f, "{:#010x}", self.0)
        }
    }
}

impl FromStr for JniVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || format!("unrecognized JNI version {s:?}");
        match s.split_once('.') {
            Some(("1", minor)) => {
                let minor: jint = minor.parse().map_err(|_| invalid())?;
                if !matches!(minor, 1 | 2 | 4 | 6 | 8) {
                    return Err(invalid());
                }
                Ok(JniVersion(0x0001_0000 | minor))
            }
            Some(_) => Err(invalid()),
            None => {
                let major: jint = s.parse().map_err(|_| invalid())?;
                if !(9..=0x7fff).contains(&major) {
                    return Err(invalid());
                }
                Ok(JniVersion(major << 16))
            }
        }
    }
}

impl TryFrom<String> for JniVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_and_modern_versions() {
        assert_eq!("1.2".parse::<JniVersion>().unwrap(), JniVersion::V1_2);
        assert_eq!("1.8".parse::<JniVersion>().unwrap(), JniVersion::V1_8);
        assert_eq!("9".parse::<JniVersion>().unwrap(), JniVersion::V9);
        assert_eq!(" 21 ".parse::<JniVersion>().unwrap(), JniVersion::V21);
    }

    #[test]
    fn rejects_unknown_versions() {
        assert!("1.9".parse::<JniVersion>().is_err());
        for skipped in ["1.3", "1.5", "1.7"] {
            assert!(skipped.parse::<JniVersion>().is_err(), "{skipped}");
        }
        assert!("2.0".parse::<JniVersion>().is_err());
        assert!("8".parse::<JniVersion>().is_err());
        assert!("latest".parse::<JniVersion>().is_err());
    }

    #[test]
    fn matches_jni_header_constants() {
        assert_eq!(JniVersion::V1_2.raw(), jni_sys::JNI_VERSION_1_2);
        assert_eq!(JniVersion::V1_8.raw(), jni_sys::JNI_VERSION_1_8);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for v in [JniVersion::V1_1, JniVersion::V1_6, JniVersion::V10, JniVersion::V19] {
            assert_eq!(v.to_string().parse::<JniVersion>().unwrap(), v);
        }
    }

    #[test]
    fn ordering_follows_release_order() {
        assert!(JniVersion::V1_8 < JniVersion::V9);
        assert!(JniVersion::V1_2 < JniVersion::V1_4);
    }
}
