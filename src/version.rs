//! Format version gate.
//!
//! Map files carry a dotted format-version string (e.g. `"1.1.5"`). Anything
//! newer than [`MAX_SUPPORTED_VERSION`] is rejected at finalize time; older
//! versions load as-is (no schema migration happens here).

use crate::error::{MapError, Result};

/// File extension used by the map format.
pub const FILE_EXTENSION: &str = "tmx";

/// Newest format version this model understands.
pub const MAX_SUPPORTED_VERSION: [u32; 3] = [1, 1, 5];

/// Validate a dotted format-version string against [`MAX_SUPPORTED_VERSION`].
///
/// Components are compared position by position over the shared prefix: a
/// component greater than the maximum rejects the version, a smaller one
/// accepts it immediately, equality moves on to the next component. Version
/// strings with fewer or more components than the maximum are legal as long
/// as the shared prefix does not exceed it (`"1.1"` is fine).
pub fn check_version(version: &str) -> Result<()> {
    let mut components = Vec::new();
    for part in version.split('.') {
        let n: u32 = part.parse().map_err(|_| MapError::FormatVersion {
            version: version.to_string(),
            help: Some("format versions are dot-separated non-negative integers".to_string()),
        })?;
        components.push(n);
    }

    for (&got, &max) in components.iter().zip(MAX_SUPPORTED_VERSION.iter()) {
        if got > max {
            return Err(MapError::FormatVersion {
                version: version.to_string(),
                help: Some(format!(
                    "the newest supported format version is {}.{}.{}",
                    MAX_SUPPORTED_VERSION[0], MAX_SUPPORTED_VERSION[1], MAX_SUPPORTED_VERSION[2]
                )),
            });
        }
        if got < max {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_version_accepted() {
        assert!(check_version("1.1.5").is_ok());
    }

    #[test]
    fn test_older_versions_accepted() {
        assert!(check_version("1.0.9").is_ok());
        assert!(check_version("0.99.99").is_ok());
        assert!(check_version("1.1.0").is_ok());
    }

    #[test]
    fn test_newer_versions_rejected() {
        assert!(check_version("1.2.0").is_err());
        assert!(check_version("2.0.0").is_err());
        assert!(check_version("1.1.6").is_err());
    }

    #[test]
    fn test_shorter_and_longer_versions() {
        // Shared-prefix comparison, not a length check.
        assert!(check_version("1.1").is_ok());
        assert!(check_version("1").is_ok());
        assert!(check_version("1.1.5.3").is_ok());
        assert!(check_version("1.2").is_err());
    }

    #[test]
    fn test_non_numeric_component_rejected() {
        assert!(check_version("1.x.0").is_err());
        assert!(check_version("").is_err());
        assert!(check_version("1..5").is_err());
    }
}
