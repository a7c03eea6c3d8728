//! Dioxus rendering surface for the wagon wheel picker.
//!
//! This crate provides:
//! - `components`: the `WagonWheelPicker` component and its wedge, ghost
//!   overlay, and center-hub pieces
//! - `image`: the pluggable image-renderer seam for host image pipelines
//! - `animation`: the injected presentation-motion capability
//!
//! All geometry, theming, and interaction logic lives in `wheel-core`; this
//! crate only wires descriptors to SVG and DOM events.

pub mod animation;
pub mod components;
pub mod image;

pub use animation::Animation;
pub use components::{GhostWedge, WagonWheelPicker, WagonWheelPickerProps, Wedge, WheelCenter};
pub use image::{render_plain_image, ImageRenderer, ImageRequest};
