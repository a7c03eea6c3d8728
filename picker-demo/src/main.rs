//! Wagon wheel picker demo.
//!
//! Renders two pickers through the public props contract: one built from
//! the list input form, one from the map shorthand form with a partial
//! theme override and animation disabled. Selection state lives here, in
//! the host: the pickers only report activations via `on_select`.

use dioxus::prelude::*;
use wheel_core::layout::LayoutParams;
use wheel_core::options::{MapEntry, OptionsInput, WheelOption};
use wheel_core::theme::Theme;
use wheel_ui::{Animation, WagonWheelPicker};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("picker-demo-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut flavor = use_signal(|| Option::<String>::None);
    let mut planet = use_signal(|| Some("mars".to_string()));

    let flavors = OptionsInput::List(vec![
        WheelOption::new("vanilla").label("Vanilla"),
        WheelOption::new("chocolate").label("Chocolate"),
        WheelOption::new("strawberry").label("Strawberry"),
        WheelOption::new("pistachio").label("Pistachio"),
        WheelOption::new("mango").label("Mango"),
    ]);

    let planets = OptionsInput::Map(vec![
        ("mercury".to_string(), MapEntry::Image("/assets/planets/mercury.png".to_string())),
        ("venus".to_string(), MapEntry::Image("/assets/planets/venus.png".to_string())),
        ("mars".to_string(), MapEntry::Image("/assets/planets/mars.png".to_string())),
        ("jupiter".to_string(), MapEntry::Image("/assets/planets/jupiter.png".to_string())),
    ]);

    let dark_theme = Theme {
        selected_background: Some("#2b3a55".to_string()),
        wedge_background: Some("#1c2437".to_string()),
        selected_border: Some("#f9b17a".to_string()),
        wedge_border: Some("#40506e".to_string()),
        center_background: Some("#141a2a".to_string()),
        center_text: Some("#e8e8e8".to_string()),
        focus_ring_color: Some("#f9b17a".to_string()),
        ..Theme::default()
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 32px; padding: 24px; \
                    font-family: sans-serif;",
            div {
                h3 { "Pick a flavor" }
                WagonWheelPicker {
                    options: flavors,
                    value: flavor(),
                    on_select: move |key: String| {
                        log::info!("flavor selected: {key}");
                        flavor.set(Some(key));
                    },
                }
            }
            div {
                h3 { "Pick a planet" }
                WagonWheelPicker {
                    options: planets,
                    value: planet(),
                    theme: dark_theme,
                    params: LayoutParams {
                        diameter: 320.0,
                        ..LayoutParams::default()
                    },
                    animation: Animation::Disabled,
                    center_text: vec!["CHOOSE".to_string(), "A".to_string(), "PLANET".to_string()],
                    on_select: move |key: String| planet.set(Some(key)),
                }
            }
        }
    }
}
