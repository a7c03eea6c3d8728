//! The wagon wheel picker: a circular radio group of SVG wedges around a
//! center hub.
//!
//! A controlled component: the selected key always comes in through
//! `value`, and activation only fires `on_select` for the host to apply.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::Key;
use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wheel_core::interaction::{Command, FocusOrigin, InteractionState};
use wheel_core::layout::{layout_scene, HubText, LayoutParams};
use wheel_core::options::OptionsInput;
use wheel_core::theme::{Theme, ThemeRole};

use crate::animation::Animation;
use crate::components::{GhostWedge, Wedge, WheelCenter};
use crate::image::ImageRenderer;

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

/// Public props contract of the picker.
#[derive(Props, Clone, PartialEq)]
pub struct WagonWheelPickerProps {
    /// Options as an ordered list or an ordered key→option/image map.
    pub options: OptionsInput,
    /// Currently selected key, owned by the host.
    pub value: Option<String>,
    /// Fired with an option's key when the user activates its wedge.
    #[props(default)]
    pub on_select: EventHandler<String>,
    #[props(default)]
    pub params: LayoutParams,
    /// Partial theme; unset roles fall back to built-in defaults.
    #[props(default)]
    pub theme: Theme,
    /// Fallback hub text lines shown while nothing is selected.
    pub center_text: Option<Vec<String>>,
    pub font_family: Option<String>,
    /// Host image pipeline hook; plain SVG images when absent.
    pub image_renderer: Option<ImageRenderer>,
    #[props(default)]
    pub animation: Animation,
}

#[component]
pub fn WagonWheelPicker(props: WagonWheelPickerProps) -> Element {
    let mut interaction = use_signal(InteractionState::new);
    // Latch distinguishing pointer-initiated focus from keyboard (Tab) focus.
    let mut pointer_down = use_signal(|| false);
    let instance = use_hook(|| NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed));

    let options = match props.options.normalize() {
        Ok(options) => options,
        Err(err) => {
            log::error!("wagon wheel picker: {err}; rendering nothing");
            return rsx! {
                div {}
            };
        }
    };
    let count = options.len();
    let keys: Vec<String> = options.iter().map(|o| o.key.clone()).collect();
    let selected_index = props
        .value
        .as_deref()
        .and_then(|value| keys.iter().position(|k| k == value));

    let mut hub_text = HubText::default();
    if let Some(lines) = &props.center_text {
        hub_text.lines = lines.clone();
    }
    if let Some(font) = &props.font_family {
        hub_text.font_family = font.clone();
    }

    // If the option set shrank since the last event, held indices are
    // re-clamped before they reach layout.
    let mut state = interaction();
    state.clamp_to(count);

    let scene = layout_scene(
        &options,
        props.value.as_deref(),
        &props.params,
        &props.theme,
        &hub_text,
        &state,
    );

    let on_select = props.on_select;
    let animation = props.animation;
    let image_renderer = props.image_renderer;

    let handle_keydown = {
        let keys = keys.clone();
        move |evt: Event<KeyboardData>| {
            let command = match evt.key() {
                Key::ArrowRight | Key::ArrowDown => Command::Next,
                Key::ArrowLeft | Key::ArrowUp => Command::Prev,
                Key::Enter => Command::Activate,
                Key::Character(c) if c == " " => Command::Activate,
                Key::Escape => Command::Cancel,
                _ => return,
            };
            evt.prevent_default();

            let activated = {
                let mut state = interaction.write();
                state.clamp_to(keys.len());
                state.apply(command, keys.len())
            };
            if let Some(index) = activated {
                if let Some(key) = keys.get(index) {
                    on_select.call(key.clone());
                }
            }
            if command == Command::Cancel {
                blur_active_element();
            }
        }
    };

    let handle_mousedown = move |_| {
        pointer_down.set(true);
        interaction.write().pointer_down();
    };

    let handle_focus = move |_| {
        let origin = if pointer_down() {
            FocusOrigin::Pointer
        } else {
            FocusOrigin::Keyboard
        };
        interaction.write().gained_focus(origin, selected_index, count);
        pointer_down.set(false);
    };

    let handle_blur = move |_| interaction.write().lost_focus();

    let size = props.params.diameter;
    let focus_outline = if state.keyboard_focus() {
        format!(
            "box-shadow: 0 0 0 3px {};",
            props.theme.resolve(ThemeRole::FocusRing)
        )
    } else {
        String::new()
    };
    let svg_style = format!(
        "overflow: visible; outline: none; border-radius: 50%; {focus_outline}"
    );
    let active_descendant = state
        .focused()
        .and_then(|i| keys.get(i))
        .map(|key| format!("option-{key}"))
        .unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center;",
            div {
                style: "position: relative; width: {size}px; height: {size}px; \
                        filter: drop-shadow(0px 3px 10px rgba(0, 0, 0, 0.12));",
                svg {
                    width: "{size}",
                    height: "{size}",
                    view_box: "0 0 {size} {size}",
                    xmlns: "http://www.w3.org/2000/svg",
                    style: "{svg_style}",
                    tabindex: "0",
                    role: "radiogroup",
                    "aria-label": "Option picker",
                    "aria-activedescendant": "{active_descendant}",
                    onkeydown: handle_keydown,
                    onmousedown: handle_mousedown,
                    onfocus: handle_focus,
                    onblur: handle_blur,

                    WheelCenter {
                        hub: scene.hub.clone(),
                        clip_id: "wheel-center-clip-{instance}",
                    }

                    for wedge in scene.wedges.iter() {
                        Wedge {
                            key: "{wedge.key}",
                            wedge: wedge.clone(),
                            hovered: state.hovered() == Some(wedge.index),
                            animation,
                            image_renderer,
                            on_activate: move |key: String| on_select.call(key),
                            on_pointer_enter: move |index: usize| {
                                interaction.write().pointer_enter(index)
                            },
                            on_pointer_leave: move |_| interaction.write().pointer_leave(),
                        }
                    }

                    if let Some(ghost) = scene.selected_ghost.clone() {
                        GhostWedge { ghost, animation, image_renderer }
                    }
                    if let Some(ghost) = scene.hover_ghost.clone() {
                        GhostWedge { ghost, animation, image_renderer }
                    }
                    if let Some(ring) = scene.focus_ring.clone() {
                        path {
                            d: "{ring.path}",
                            fill: "none",
                            stroke: "{ring.color}",
                            stroke_width: "{ring.stroke_width}",
                            style: "pointer-events: none; transform-origin: center; \
                                    transform-box: fill-box; transform: scale(1.01);",
                        }
                    }
                }
            }
        }
    }
}

/// Release DOM focus from whatever element currently holds it. Used by the
/// Escape handler so cancelling also leaves the widget's tab stop.
fn blur_active_element() {
    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element());
    if let Some(element) = active {
        if let Some(svg) = element.dyn_ref::<web_sys::SvgElement>() {
            let _ = svg.blur();
        } else if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.blur();
        }
    }
}
