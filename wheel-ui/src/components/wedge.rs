//! One interactive wedge: path, image or label, and pointer wiring.

use dioxus::prelude::*;
use wheel_core::layout::WedgeDescriptor;

use crate::animation::Animation;
use crate::image::{wedge_visual, ImageRenderer};

/// Props for one wedge.
#[derive(Props, Clone, PartialEq)]
pub struct WedgeProps {
    pub wedge: WedgeDescriptor,
    /// Whether the pointer is currently over this wedge.
    #[props(default)]
    pub hovered: bool,
    #[props(default)]
    pub animation: Animation,
    pub image_renderer: Option<ImageRenderer>,
    /// Fired with the wedge's key on a primary-button activation.
    pub on_activate: EventHandler<String>,
    pub on_pointer_enter: EventHandler<usize>,
    pub on_pointer_leave: EventHandler<()>,
}

/// A single annulus sector acting as one radio item.
#[component]
pub fn Wedge(props: WedgeProps) -> Element {
    let wedge = &props.wedge;
    let index = wedge.index;
    let key = wedge.key.clone();
    let checked = if wedge.is_selected { "true" } else { "false" };

    let scale = if props.animation.is_enabled() && props.hovered {
        "scale(1.03)"
    } else {
        "scale(1)"
    };
    let transition = if props.animation.is_enabled() {
        "transition: transform 0.2s ease;"
    } else {
        ""
    };
    let group_style = format!(
        "cursor: pointer; transform-origin: center; transform: {scale}; {transition}"
    );

    let on_activate = props.on_activate;
    let on_pointer_enter = props.on_pointer_enter;
    let on_pointer_leave = props.on_pointer_leave;

    rsx! {
        g {
            id: "option-{wedge.key}",
            role: "radio",
            "aria-checked": "{checked}",
            "aria-label": "{wedge.label}",
            style: "{group_style}",
            onmouseenter: move |_| on_pointer_enter.call(index),
            onmouseleave: move |_| on_pointer_leave.call(()),
            path {
                d: "{wedge.path}",
                fill: "{wedge.fill}",
                stroke: "{wedge.stroke}",
                stroke_width: "{wedge.stroke_width}",
                style: "pointer-events: auto;",
                onclick: move |_| on_activate.call(key.clone()),
            }
            {wedge_visual(wedge, props.image_renderer)}
        }
    }
}
