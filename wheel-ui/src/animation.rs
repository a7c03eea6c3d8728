//! Presentation-motion capability, injected by the host.
//!
//! Replaces a runtime presence probe for an animation library with an
//! explicit configuration. Layout output is identical either way; only CSS
//! transitions and hover/pop scaling differ.

/// Whether hover and pop transitions are applied to the rendered scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    #[default]
    Enabled,
    Disabled,
}

impl Animation {
    pub fn is_enabled(self) -> bool {
        self == Animation::Enabled
    }
}
