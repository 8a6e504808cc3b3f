//! Object keys for Open Graph images

use std::fmt;

use super::{BucketError, BucketResult};

/// Prefix under which all Open Graph images are stored
pub const IMAGE_KEY_PREFIX: &str = "IMAGES/OG/";

/// Full S3 key of an image, always located under [`IMAGE_KEY_PREFIX`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageKey(String);

impl ImageKey {
    /// Builds the key for a caller-supplied image name
    ///
    /// The name is appended to the prefix verbatim. Names that could
    /// resolve outside the prefix are rejected.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::InvalidInput` if the name is empty, contains a
    /// backslash, control character or U+FFFD, or has an empty, `.` or `..`
    /// segment
    pub fn from_name(name: &str) -> BucketResult<Self> {
        if name.is_empty() {
            return Err(BucketError::InvalidInput("name is empty".to_string()));
        }

        if name.contains('\\') {
            return Err(BucketError::InvalidInput(
                "name must not contain a backslash".to_string(),
            ));
        }

        if name.chars().any(char::is_control) {
            return Err(BucketError::InvalidInput(
                "name must not contain control characters".to_string(),
            ));
        }

        // Percent-encoded bytes that are not UTF-8 decode to U+FFFD
        if name.contains(char::REPLACEMENT_CHARACTER) {
            return Err(BucketError::InvalidInput(
                "name must be valid UTF-8".to_string(),
            ));
        }

        for segment in name.split('/') {
            match segment {
                "" => {
                    return Err(BucketError::InvalidInput(
                        "name must not contain empty path segments".to_string(),
                    ))
                }
                "." | ".." => {
                    return Err(BucketError::InvalidInput(format!(
                        "name must not contain a '{segment}' path segment"
                    )))
                }
                _ => {}
            }
        }

        Ok(Self(format!("{IMAGE_KEY_PREFIX}{name}")))
    }

    /// The full S3 key, prefix included
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The caller-supplied part of the key
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0[IMAGE_KEY_PREFIX.len()..]
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
