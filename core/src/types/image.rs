/// Reference to one image resource within a display set
///
/// An image with `num_frames > 1` is a multi-frame image: it expands into
/// one stack entry per frame, each frame independently addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef {
    /// SOP Instance UID
    pub sop_instance_uid: String,

    /// Number of frames in this image (0 or 1 means single-frame)
    pub num_frames: u32,

    /// Instance number within the series, if known
    pub instance_number: Option<u32>,
}

impl ImageRef {
    /// Creates an image reference
    pub fn new(sop_instance_uid: impl Into<String>, num_frames: u32) -> Self {
        Self {
            sop_instance_uid: sop_instance_uid.into(),
            num_frames,
            instance_number: None,
        }
    }

    /// Sets the instance number
    pub fn with_instance_number(mut self, instance_number: u32) -> Self {
        self.instance_number = Some(instance_number);
        self
    }

    /// Checks if this image expands into multiple stack entries
    pub fn is_multiframe(&self) -> bool {
        self.num_frames > 1
    }
}
