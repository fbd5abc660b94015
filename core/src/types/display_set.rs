use super::ImageRef;

/// An ordered, study-scoped group of images presented together as one
/// logical series
///
/// `display_set_instance_uid` is the stable key under which the registry
/// stores the stack built from this display set. The registry never
/// mutates a display set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplaySet {
    /// Unique key for this display set
    pub display_set_instance_uid: String,

    /// Series Instance UID, if known
    pub series_instance_uid: Option<String>,

    /// Series description, if known
    pub series_description: Option<String>,

    /// Images in display order
    pub images: Vec<ImageRef>,
}

impl DisplaySet {
    /// Creates a display set from its key and ordered images
    pub fn new(display_set_instance_uid: impl Into<String>, images: Vec<ImageRef>) -> Self {
        Self {
            display_set_instance_uid: display_set_instance_uid.into(),
            series_instance_uid: None,
            series_description: None,
            images,
        }
    }

    /// Sets the series UID
    pub fn with_series_uid(mut self, series_instance_uid: impl Into<String>) -> Self {
        self.series_instance_uid = Some(series_instance_uid.into());
        self
    }

    /// Sets the series description
    pub fn with_series_description(mut self, description: impl Into<String>) -> Self {
        self.series_description = Some(description.into());
        self
    }

    /// Number of source images (not expanded frames)
    pub fn num_images(&self) -> usize {
        self.images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_set_counts_source_images() {
        let display_set = DisplaySet::new(
            "ds1",
            vec![ImageRef::new("1.1", 1), ImageRef::new("1.2", 30)],
        );

        // A 30-frame image still counts as one source image
        assert_eq!(display_set.num_images(), 2);
    }

    #[test]
    fn test_display_set_builders() {
        let display_set = DisplaySet::new("ds1", vec![])
            .with_series_uid("1.2.840.1")
            .with_series_description("AXIAL");

        assert_eq!(display_set.series_instance_uid.as_deref(), Some("1.2.840.1"));
        assert_eq!(display_set.series_description.as_deref(), Some("AXIAL"));
        assert_eq!(display_set.num_images(), 0);
    }
}
