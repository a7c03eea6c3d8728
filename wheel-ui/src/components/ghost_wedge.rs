//! Ghost overlay: an enlarged, non-interactive duplicate of a wedge drawn
//! above the normal set to convey selection or hover emphasis.

use dioxus::prelude::*;
use wheel_core::layout::GhostDescriptor;

use crate::animation::Animation;
use crate::image::{wedge_visual, ImageRenderer};

#[derive(Props, Clone, PartialEq)]
pub struct GhostWedgeProps {
    pub ghost: GhostDescriptor,
    #[props(default)]
    pub animation: Animation,
    pub image_renderer: Option<ImageRenderer>,
}

#[component]
pub fn GhostWedge(props: GhostWedgeProps) -> Element {
    let wedge = &props.ghost.wedge;
    let transition = if props.animation.is_enabled() {
        "transition: transform 0.2s ease;"
    } else {
        ""
    };
    let group_style = format!(
        "pointer-events: none; transform-origin: center; transform: scale(1.05); {transition}"
    );

    rsx! {
        g {
            "aria-hidden": "true",
            style: "{group_style}",
            path {
                d: "{wedge.path}",
                fill: "{props.ghost.fill}",
                stroke: "{wedge.stroke}",
                stroke_width: "{wedge.stroke_width}",
                style: "filter: drop-shadow(0px 3px 12px rgba(0, 0, 0, 0.25));",
            }
            {wedge_visual(wedge, props.image_renderer)}
        }
    }
}
