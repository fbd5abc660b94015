use crate::id_generator::ImageIdGenerator;
use crate::metadata_store::MetadataStore;
use crate::types::{DisplaySet, ImageId, ImageMetadata, Study};
use log::info;
use std::rc::Rc;

/// Strategy that turns a display set into an ordered image-id sequence
///
/// Replaced wholesale via [`set_builder`](crate::StackRegistry::set_builder)
/// when an integrating system needs a different construction policy;
/// individual steps are not overridable.
pub trait StackBuilder {
    /// Builds the id sequence for `display_set`, submitting one metadata
    /// record per produced id into `metadata`
    fn build(
        &self,
        study: &Rc<Study>,
        display_set: &Rc<DisplaySet>,
        ids: &dyn ImageIdGenerator,
        metadata: &mut dyn MetadataStore,
    ) -> Vec<ImageId>;
}

/// Default stack construction policy
///
/// Walks the display set in image order, expanding each multi-frame image
/// into one entry per frame (ascending). For every produced id, a metadata
/// record is submitted carrying the source image, its display set and
/// study, the source-image count, and the image's 1-based position.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStackBuilder;

impl StackBuilder for DefaultStackBuilder {
    fn build(
        &self,
        study: &Rc<Study>,
        display_set: &Rc<DisplaySet>,
        ids: &dyn ImageIdGenerator,
        metadata: &mut dyn MetadataStore,
    ) -> Vec<ImageId> {
        let num_images = display_set.images.len();
        let mut image_ids = Vec::with_capacity(num_images);

        for (index, image) in display_set.images.iter().enumerate() {
            let image_index = index + 1;

            if image.is_multiframe() {
                info!(
                    "multiframe image detected: {} ({} frames)",
                    image.sop_instance_uid, image.num_frames
                );
                for frame in 0..image.num_frames {
                    let record = ImageMetadata {
                        instance: image.clone(),
                        series: Rc::clone(display_set),
                        study: Rc::clone(study),
                        num_images,
                        image_index,
                        frame: Some(frame),
                    };
                    let image_id = ids.id_for(image, Some(frame));
                    metadata.submit(&image_id, record);
                    image_ids.push(image_id);
                }
            } else {
                let record = ImageMetadata {
                    instance: image.clone(),
                    series: Rc::clone(display_set),
                    study: Rc::clone(study),
                    num_images,
                    image_index,
                    frame: None,
                };
                let image_id = ids.id_for(image, None);
                metadata.submit(&image_id, record);
                image_ids.push(image_id);
            }
        }

        image_ids
    }
}
