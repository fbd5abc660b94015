//! Core type definitions for the stack registry
//!
//! This module provides the fundamental types used throughout the stackview library:
//! - [`Study`]: study-level context shared by every image in a display set
//! - [`DisplaySet`]: an ordered, study-scoped group of images with a stable key
//! - [`ImageRef`]: one image resource, possibly multi-frame
//! - [`ImageId`]: opaque identifier for one renderable 2-D image
//! - [`ImageMetadata`]: per-id positional and contextual annotation
//! - [`Stack`]: the ordered id sequence built from one display set

mod display_set;
mod image;
mod image_id;
mod metadata;
mod stack;
mod study;

pub use display_set::DisplaySet;
pub use image::ImageRef;
pub use image_id::ImageId;
pub use metadata::ImageMetadata;
pub use stack::Stack;
pub use study::Study;
