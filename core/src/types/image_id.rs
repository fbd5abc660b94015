use std::fmt;

/// Opaque identifier for one renderable 2-D image (one frame of one image)
///
/// Produced by an [`ImageIdGenerator`](crate::ImageIdGenerator); unique
/// within a process run and deterministic for the same (image, frame) input.
/// The registry treats it as an opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageId(String);

impl ImageId {
    /// Creates an image id from a string token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ImageId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for ImageId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}
