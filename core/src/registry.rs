use crate::builder::{DefaultStackBuilder, StackBuilder};
use crate::error::{Result, StackError};
use crate::id_generator::{DefaultImageIdGenerator, ImageIdGenerator};
use crate::metadata_store::MetadataStore;
use crate::types::{DisplaySet, Stack, Study};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Receives a notification whenever a stack is added or replaced
///
/// Subscribers are registered as weak handles; one that has been dropped
/// since registration is skipped at notification time.
pub trait StackSubscriber {
    /// Called with the stack just stored under its display-set key
    fn stack_updated(&mut self, stack: &Stack);
}

/// Registry mapping display-set keys to built stacks
///
/// The single surface external code touches: build-and-register, lookup,
/// bulk read-only view, clear, subscription, and builder-strategy
/// override. Owned by the composition root that wires up the viewer and
/// injected wherever stack access is needed; there is no global instance.
///
/// Single-threaded by design: construction runs to completion before
/// returning, including all metadata submissions and subscriber
/// notification. Hosts with concurrent callers must serialize access
/// externally.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use stackview_core::{DisplaySet, ImageRef, InMemoryMetadataStore, StackRegistry, Study};
///
/// let mut registry = StackRegistry::new();
/// let mut metadata = InMemoryMetadataStore::new();
///
/// let study = Rc::new(Study::new("1.2.3"));
/// let display_set = Rc::new(DisplaySet::new(
///     "ds1",
///     vec![ImageRef::new("1.1", 1), ImageRef::new("1.2", 3)],
/// ));
///
/// let stack = registry.make_and_add_stack(&study, &display_set, &mut metadata);
/// assert_eq!(stack.len(), 4); // one entry per frame
/// assert_eq!(registry.find_stack("ds1"), Some(&stack));
/// ```
pub struct StackRegistry {
    stacks: HashMap<String, Stack>,
    builder: Box<dyn StackBuilder>,
    ids: Box<dyn ImageIdGenerator>,
    subscribers: Vec<Weak<RefCell<dyn StackSubscriber>>>,
}

impl Default for StackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StackRegistry {
    /// Creates a registry with the default builder and id generator
    pub fn new() -> Self {
        Self::with_parts(
            Box::new(DefaultStackBuilder),
            Box::new(DefaultImageIdGenerator),
        )
    }

    /// Creates a registry with an injected builder strategy and id generator
    pub fn with_parts(builder: Box<dyn StackBuilder>, ids: Box<dyn ImageIdGenerator>) -> Self {
        Self {
            stacks: HashMap::new(),
            builder,
            ids,
            subscribers: Vec::new(),
        }
    }

    /// Builds a stack for `display_set`, stores it under the display set's
    /// key, and notifies subscribers
    ///
    /// Metadata is emitted into `metadata` per produced id as a side
    /// effect. A prior stack under the same key is replaced wholesale, not
    /// merged. Returns the stack just stored; an empty display set yields
    /// an empty stack.
    pub fn make_and_add_stack(
        &mut self,
        study: &Rc<Study>,
        display_set: &Rc<DisplaySet>,
        metadata: &mut dyn MetadataStore,
    ) -> Stack {
        let image_ids = self
            .builder
            .build(study, display_set, self.ids.as_ref(), metadata);
        let stack = Stack::new(image_ids);
        self.stacks
            .insert(display_set.display_set_instance_uid.clone(), stack.clone());
        self.notify(&stack);
        stack
    }

    /// Finds a stack by display-set key; `None` when no stack is stored
    pub fn find_stack(&self, display_set_instance_uid: &str) -> Option<&Stack> {
        self.stacks.get(display_set_instance_uid)
    }

    /// Read-only view over all stored (key, stack) pairs
    pub fn all_stacks(&self) -> impl Iterator<Item = (&str, &Stack)> {
        self.stacks.iter().map(|(key, stack)| (key.as_str(), stack))
    }

    /// Number of stored stacks
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Removes all stored stacks
    ///
    /// Subscribers stay registered.
    pub fn clear_stacks(&mut self) {
        self.stacks.clear();
    }

    /// Registers a subscriber to be notified of added or replaced stacks
    ///
    /// There is no unsubscribe operation; dropping the subscriber's strong
    /// handle retires it instead.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::InvalidArgument`] when the handle is already
    /// dead and can never be invoked.
    pub fn add_stack_updated_callback(
        &mut self,
        subscriber: Weak<RefCell<dyn StackSubscriber>>,
    ) -> Result<()> {
        if subscriber.upgrade().is_none() {
            return Err(StackError::InvalidArgument(
                "callback must be provided as a live subscriber handle".to_string(),
            ));
        }
        self.subscribers.push(subscriber);
        Ok(())
    }

    /// Returns the active builder strategy
    pub fn builder(&self) -> &dyn StackBuilder {
        self.builder.as_ref()
    }

    /// Replaces the builder strategy wholesale
    ///
    /// No shape validation happens here; a misbehaving strategy surfaces
    /// on the next [`make_and_add_stack`](Self::make_and_add_stack).
    pub fn set_builder(&mut self, builder: Box<dyn StackBuilder>) {
        self.builder = builder;
    }

    fn notify(&self, stack: &Stack) {
        for subscriber in &self.subscribers {
            if let Some(subscriber) = subscriber.upgrade() {
                subscriber.borrow_mut().stack_updated(stack);
            }
        }
    }
}
