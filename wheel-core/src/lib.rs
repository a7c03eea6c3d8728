//! Core math and state for the wagon wheel option picker.
//!
//! This crate provides:
//! - `geometry`: polar/Cartesian conversion and SVG annulus-segment paths
//! - `options`: the two accepted option input shapes and their normalization
//! - `theme`: named visual roles with a total fallback table
//! - `layout`: the wedge layout engine producing one scene per render
//! - `interaction`: hover and keyboard-focus state for one picker instance
//!
//! Everything here is pure and platform-agnostic; rendering lives in the
//! `wheel-ui` crate.

pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod options;
pub mod theme;

pub use interaction::{Command, FocusOrigin, InteractionState};
pub use layout::{layout_scene, HubText, LayoutParams, WheelScene};
pub use options::{MapEntry, OptionsInput, WheelOption};
pub use theme::{Theme, ThemeRole};
