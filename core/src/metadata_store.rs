use crate::types::{ImageId, ImageMetadata};
use std::collections::HashMap;

/// Sink for per-image metadata records emitted during stack construction
///
/// Semantics are append-or-overwrite keyed by image id; nothing is read
/// back by the registry. Downstream geometry and overlay code owns the
/// store and queries it by id.
pub trait MetadataStore {
    /// Registers `record` under `image_id`, replacing any prior record
    fn submit(&mut self, image_id: &ImageId, record: ImageMetadata);
}

/// Metadata store backed by an in-process map
///
/// Suitable as the default sink when no external metadata subsystem is
/// wired in, and as the query surface for single-process viewers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadataStore {
    records: HashMap<ImageId, ImageMetadata>,
}

impl InMemoryMetadataStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the record for an image id
    pub fn get(&self, image_id: &ImageId) -> Option<&ImageMetadata> {
        self.records.get(image_id)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the store has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn submit(&mut self, image_id: &ImageId, record: ImageMetadata) {
        self.records.insert(image_id.clone(), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DisplaySet, ImageRef, Study};
    use std::rc::Rc;

    fn make_record(image_index: usize) -> ImageMetadata {
        let image = ImageRef::new("1.1", 1);
        ImageMetadata {
            instance: image.clone(),
            series: Rc::new(DisplaySet::new("ds1", vec![image])),
            study: Rc::new(Study::new("1.2.3")),
            num_images: 1,
            image_index,
            frame: None,
        }
    }

    #[test]
    fn test_submit_and_get() {
        let mut store = InMemoryMetadataStore::new();
        let id = ImageId::new("dicom:1.1");

        store.submit(&id, make_record(1));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().image_index, 1);
        assert!(store.get(&ImageId::new("dicom:unknown")).is_none());
    }

    #[test]
    fn test_resubmit_overwrites() {
        let mut store = InMemoryMetadataStore::new();
        let id = ImageId::new("dicom:1.1");

        store.submit(&id, make_record(1));
        store.submit(&id, make_record(7));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().image_index, 7);
    }
}
