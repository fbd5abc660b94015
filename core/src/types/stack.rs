use super::ImageId;

/// The ordered sequence of image ids built from one display set
///
/// Ready for sequential viewport display: ids follow the display set's
/// image order, with frames of a multi-frame image in ascending order.
/// Stacks are read-only once built; a rebuild replaces the whole stack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack {
    image_ids: Vec<ImageId>,
}

impl Stack {
    /// Creates a stack from an ordered id sequence
    pub fn new(image_ids: Vec<ImageId>) -> Self {
        Self { image_ids }
    }

    /// Returns the ids in stack order
    pub fn image_ids(&self) -> &[ImageId] {
        &self.image_ids
    }

    /// Iterates the ids in stack order
    pub fn iter(&self) -> std::slice::Iter<'_, ImageId> {
        self.image_ids.iter()
    }

    /// Number of entries (expanded frames included)
    pub fn len(&self) -> usize {
        self.image_ids.len()
    }

    /// Checks if the stack has no entries
    pub fn is_empty(&self) -> bool {
        self.image_ids.is_empty()
    }
}

impl From<Vec<ImageId>> for Stack {
    fn from(image_ids: Vec<ImageId>) -> Self {
        Self::new(image_ids)
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a ImageId;
    type IntoIter = std::slice::Iter<'a, ImageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.image_ids.iter()
    }
}
