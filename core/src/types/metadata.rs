use super::{DisplaySet, ImageRef, Study};
use std::rc::Rc;

/// Positional and contextual annotation attached to one image id
///
/// One record is emitted per id produced during stack construction.
/// Downstream geometry and overlay logic looks these up by image id to
/// compute orientation markers, reference lines, and overlay text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageMetadata {
    /// The source image this id was produced from
    pub instance: ImageRef,

    /// The display set the image belongs to
    pub series: Rc<DisplaySet>,

    /// The study the display set belongs to
    pub study: Rc<Study>,

    /// Total count of source images in the display set at build time
    /// (multi-frame images count once)
    pub num_images: usize,

    /// 1-based position of the source image within the display set,
    /// identical for every frame emitted from that image
    pub image_index: usize,

    /// 0-based frame index, present only for multi-frame images
    pub frame: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_shares_context() {
        let study = Rc::new(Study::new("1.2.3"));
        let series = Rc::new(DisplaySet::new("ds1", vec![ImageRef::new("1.1", 4)]));

        let first = ImageMetadata {
            instance: series.images[0].clone(),
            series: Rc::clone(&series),
            study: Rc::clone(&study),
            num_images: 1,
            image_index: 1,
            frame: Some(0),
        };
        let second = ImageMetadata {
            frame: Some(1),
            ..first.clone()
        };

        // Records for frames of one image share the same context
        assert!(Rc::ptr_eq(&first.series, &second.series));
        assert!(Rc::ptr_eq(&first.study, &second.study));
        assert_eq!(first.image_index, second.image_index);
        assert_ne!(first.frame, second.frame);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_metadata_serializes_to_json() {
        let study = Rc::new(Study::new("1.2.3"));
        let series = Rc::new(DisplaySet::new("ds1", vec![ImageRef::new("1.1", 4)]));

        let record = ImageMetadata {
            instance: series.images[0].clone(),
            series: Rc::clone(&series),
            study: Rc::clone(&study),
            num_images: 1,
            image_index: 1,
            frame: Some(2),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["image_index"], 1);
        assert_eq!(value["num_images"], 1);
        assert_eq!(value["frame"], 2);
        assert_eq!(value["instance"]["sop_instance_uid"], "1.1");
        assert_eq!(value["series"]["display_set_instance_uid"], "ds1");
        assert_eq!(value["study"]["study_instance_uid"], "1.2.3");
    }
}
