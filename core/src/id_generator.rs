use crate::types::{ImageId, ImageRef};

/// Produces the addressable identifier for one frame of one image
///
/// Implementations must be total (never fail for any image the caller
/// passes in) and deterministic per (image, frame) input. Ids must be
/// unique within a process run; the registry does not check this, and a
/// duplicate id silently overwrites the prior record in the metadata
/// store.
pub trait ImageIdGenerator {
    /// Returns the id for `image`, or for one of its frames when `frame`
    /// is set (0-based)
    fn id_for(&self, image: &ImageRef, frame: Option<u32>) -> ImageId;
}

/// Default generator deriving ids from the SOP Instance UID
///
/// Single-frame images map to `dicom:<uid>`; a frame of a multi-frame
/// image maps to `dicom:<uid>?frame=<n>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultImageIdGenerator;

impl ImageIdGenerator for DefaultImageIdGenerator {
    fn id_for(&self, image: &ImageRef, frame: Option<u32>) -> ImageId {
        match frame {
            Some(frame) => ImageId::new(format!(
                "dicom:{}?frame={}",
                image.sop_instance_uid, frame
            )),
            None => ImageId::new(format!("dicom:{}", image.sop_instance_uid)),
        }
    }
}
