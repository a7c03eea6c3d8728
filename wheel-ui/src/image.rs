//! Pluggable image rendering.
//!
//! Hosts with an image-optimization pipeline can inject their own renderer;
//! without one the picker falls back to a plain SVG `image` element. Wedges
//! with no image at all render their label text instead.

use dioxus::prelude::*;
use wheel_core::layout::WedgeDescriptor;

/// One image the picker wants drawn, in SVG user-space coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRequest {
    pub href: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub alt: String,
}

/// Host-injectable image renderer.
pub type ImageRenderer = Callback<ImageRequest, Element>;

/// Default renderer: a plain SVG image element.
pub fn render_plain_image(req: ImageRequest) -> Element {
    rsx! {
        image {
            href: "{req.href}",
            x: "{req.x}",
            y: "{req.y}",
            width: "{req.width}",
            height: "{req.height}",
            "aria-label": "{req.alt}",
            style: "pointer-events: none;",
        }
    }
}

/// The visual content of a wedge: its image through the renderer seam, or
/// the label text centered in the image slot when no image is set.
pub(crate) fn wedge_visual(wedge: &WedgeDescriptor, renderer: Option<ImageRenderer>) -> Element {
    match &wedge.image {
        Some(href) => {
            let req = ImageRequest {
                href: href.clone(),
                x: wedge.image_x,
                y: wedge.image_y,
                width: wedge.image_size,
                height: wedge.image_size,
                alt: wedge.label.clone(),
            };
            match renderer {
                Some(render) => render.call(req),
                None => render_plain_image(req),
            }
        }
        None => {
            let x = wedge.image_x + wedge.image_size / 2.0;
            let y = wedge.image_y + wedge.image_size / 2.0;
            let (font_size, font_weight) = if wedge.is_selected {
                ("18", "600")
            } else {
                ("14", "500")
            };
            rsx! {
                text {
                    x: "{x}",
                    y: "{y}",
                    text_anchor: "middle",
                    fill: "#333333",
                    font_size,
                    font_weight,
                    "dominant-baseline": "central",
                    style: "pointer-events: none;",
                    "{wedge.label}"
                }
            }
        }
    }
}
