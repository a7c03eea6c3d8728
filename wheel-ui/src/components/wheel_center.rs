//! The wheel's center hub: the selected option's image cropped to the inner
//! circle, or fallback text lines while nothing is selected.

use dioxus::prelude::*;
use wheel_core::layout::HubDescriptor;

const LINE_HEIGHT: f64 = 19.2; // 16px at 1.2 line height

#[derive(Props, Clone, PartialEq)]
pub struct WheelCenterProps {
    pub hub: HubDescriptor,
    /// Unique per picker instance so clip paths of multiple mounted pickers
    /// never cross-link.
    pub clip_id: String,
}

#[component]
pub fn WheelCenter(props: WheelCenterProps) -> Element {
    let hub = &props.hub;
    let image_x = hub.cx - hub.radius;
    let image_y = hub.cy - hub.radius;
    let image_size = hub.radius * 2.0;

    // Each fallback line gets an explicit y so the block centers on the hub.
    let line_count = hub.lines.len();
    let lines: Vec<(String, f64)> = hub
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let y = hub.cy + (i as f64 - (line_count as f64 - 1.0) / 2.0) * LINE_HEIGHT;
            (line.clone(), y)
        })
        .collect();

    rsx! {
        circle {
            cx: "{hub.cx}",
            cy: "{hub.cy}",
            r: "{hub.radius}",
            fill: "{hub.fill}",
            stroke: "{hub.stroke}",
            stroke_width: "2",
        }
        if let Some(image) = &hub.image {
            defs {
                clipPath {
                    id: "{props.clip_id}",
                    circle {
                        cx: "{hub.cx}",
                        cy: "{hub.cy}",
                        r: "{hub.radius}",
                    }
                }
            }
            image {
                href: "{image}",
                x: "{image_x}",
                y: "{image_y}",
                width: "{image_size}",
                height: "{image_size}",
                "preserveAspectRatio": "xMidYMid slice",
                "clip-path": "url(#{props.clip_id})",
                style: "pointer-events: none;",
            }
            // Redraw the border above the image edge.
            circle {
                cx: "{hub.cx}",
                cy: "{hub.cy}",
                r: "{hub.radius}",
                fill: "none",
                stroke: "{hub.stroke}",
                stroke_width: "2",
            }
        } else {
            text {
                text_anchor: "middle",
                fill: "{hub.text_color}",
                font_family: "{hub.font_family}",
                font_size: "16",
                font_weight: "500",
                "dominant-baseline": "central",
                style: "pointer-events: none;",
                for (line, y) in lines {
                    tspan {
                        x: "{hub.cx}",
                        y: "{y}",
                        "{line}"
                    }
                }
            }
        }
    }
}
