//! The wedge layout engine.
//!
//! Turns (ordered options, current selection, sizing, theme, interaction
//! state) into one [`WheelScene`]: a wedge descriptor per option, the center
//! hub, ghost overlays for the selected and hovered wedges, and a focus ring
//! for the keyboard-focused wedge. The engine is deterministic: identical
//! inputs produce byte-identical path strings and identical placements.

use serde::{Deserialize, Serialize};

use crate::geometry::{polar_to_cartesian, wedge_path};
use crate::interaction::InteractionState;
use crate::options::{validate_count, WheelOption, MIN_OPTIONS};
use crate::theme::{Theme, ThemeRole};

/// Diameter the image-size constants were tuned at; image sizes scale by
/// `diameter / REFERENCE_DIAMETER` so the wheel is resolution-independent.
pub const REFERENCE_DIAMETER: f64 = 420.0;

const SELECTED_IMAGE_SIZE: f64 = 110.0;
const UNSELECTED_IMAGE_SIZE: f64 = 85.0;
const SELECTED_STROKE_WIDTH: f64 = 4.0;
const UNSELECTED_STROKE_WIDTH: f64 = 1.5;
const FOCUS_RING_STROKE_WIDTH: f64 = 4.0;

/// Annulus sizing. Ratios are fractions of `diameter / 2`; callers must keep
/// `outer_ratio >= inner_ratio` and both non-negative (unchecked
/// precondition).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub diameter: f64,
    pub inner_ratio: f64,
    pub outer_ratio: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            diameter: REFERENCE_DIAMETER,
            inner_ratio: 0.4,
            outer_ratio: 0.9,
        }
    }
}

/// Fallback hub text shown while nothing is selected.
#[derive(Clone, Debug, PartialEq)]
pub struct HubText {
    pub lines: Vec<String>,
    pub font_family: String,
}

impl Default for HubText {
    fn default() -> Self {
        Self {
            lines: vec!["SELECT".to_string(), "YOUR".to_string(), "OPTION".to_string()],
            font_family: "serif".to_string(),
        }
    }
}

/// Everything needed to draw one wedge. A pure function of the layout
/// inputs, recomputed on every pass and never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct WedgeDescriptor {
    pub key: String,
    pub index: usize,
    pub is_selected: bool,
    /// Angular span in degrees, clockwise from 12 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub image: Option<String>,
    pub label: String,
    /// Top-left corner of the image slot; the image is centered on the
    /// wedge's mid-angle/mid-radius point.
    pub image_x: f64,
    pub image_y: f64,
    pub image_size: f64,
}

/// The center hub: the selected option's image cropped to the inner circle,
/// or fallback text lines while nothing is selected.
#[derive(Clone, Debug, PartialEq)]
pub struct HubDescriptor {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub image: Option<String>,
    pub lines: Vec<String>,
    pub text_color: String,
    pub font_family: String,
}

/// An enlarged duplicate of a wedge drawn above the normal set.
#[derive(Clone, Debug, PartialEq)]
pub struct GhostDescriptor {
    pub wedge: WedgeDescriptor,
    /// Alternate fill from the hover theme roles.
    pub fill: String,
}

/// Unfilled ring traced just outside the keyboard-focused wedge.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusRing {
    pub key: String,
    pub path: String,
    pub color: String,
    pub stroke_width: f64,
}

/// One full render pass worth of descriptors, in draw order: hub, wedges,
/// selected ghost, hover ghost, focus ring.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelScene {
    pub wedges: Vec<WedgeDescriptor>,
    pub hub: HubDescriptor,
    pub selected_ghost: Option<GhostDescriptor>,
    pub hover_ghost: Option<GhostDescriptor>,
    pub focus_ring: Option<FocusRing>,
}

/// Lay out the whole wheel.
///
/// Partitions 360 degrees into `max(options.len(), 3)` equal sectors in
/// option order. At most one wedge is selected: the one whose key equals
/// `value`. Counts outside [3, 8] log an advisory and lay out best-effort.
pub fn layout_scene(
    options: &[WheelOption],
    value: Option<&str>,
    params: &LayoutParams,
    theme: &Theme,
    hub_text: &HubText,
    interaction: &InteractionState,
) -> WheelScene {
    validate_count(options.len());

    let cx = params.diameter / 2.0;
    let cy = params.diameter / 2.0;
    let r_outer = (params.diameter / 2.0) * params.outer_ratio;
    let r_inner = (params.diameter / 2.0) * params.inner_ratio;

    let sectors = options.len().max(MIN_OPTIONS);
    let step = 360.0 / sectors as f64;
    let scale = params.diameter / REFERENCE_DIAMETER;

    let wedges: Vec<WedgeDescriptor> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let start_angle = i as f64 * step;
            let end_angle = start_angle + step;
            let is_selected = value == Some(option.key.as_str());

            let (fill_role, stroke_role, stroke_width, base_image_size) = if is_selected {
                (
                    ThemeRole::SelectedBackground,
                    ThemeRole::SelectedBorder,
                    SELECTED_STROKE_WIDTH,
                    SELECTED_IMAGE_SIZE,
                )
            } else {
                (
                    ThemeRole::WedgeBackground,
                    ThemeRole::WedgeBorder,
                    UNSELECTED_STROKE_WIDTH,
                    UNSELECTED_IMAGE_SIZE,
                )
            };

            // Selected wedges "pop": larger image, heavier border.
            let image_size = base_image_size * scale;
            let mid = polar_to_cartesian(
                (r_inner + r_outer) / 2.0,
                start_angle + step / 2.0,
                cx,
                cy,
            );

            WedgeDescriptor {
                key: option.key.clone(),
                index: i,
                is_selected,
                start_angle,
                end_angle,
                path: wedge_path(cx, cy, r_outer, r_inner, start_angle, end_angle),
                fill: theme.resolve(fill_role).to_string(),
                stroke: theme.resolve(stroke_role).to_string(),
                stroke_width,
                image: option.image.clone(),
                label: option.label.clone().unwrap_or_else(|| option.key.clone()),
                image_x: mid.x - image_size / 2.0,
                image_y: mid.y - image_size / 2.0,
                image_size,
            }
        })
        .collect();

    let selected = wedges.iter().find(|w| w.is_selected);

    let hub = HubDescriptor {
        cx,
        cy,
        radius: r_inner,
        fill: theme.resolve(ThemeRole::CenterBackground).to_string(),
        stroke: theme.resolve(ThemeRole::CenterBorder).to_string(),
        image: selected.and_then(|w| w.image.clone()),
        lines: if selected.is_some() {
            Vec::new()
        } else {
            hub_text.lines.clone()
        },
        text_color: theme.resolve(ThemeRole::CenterText).to_string(),
        font_family: hub_text.font_family.clone(),
    };

    let selected_ghost = selected.map(|w| GhostDescriptor {
        wedge: w.clone(),
        fill: theme.resolve(ThemeRole::SelectedHoverBackground).to_string(),
    });

    // Hover ghost only when the hovered wedge is not the selected one; the
    // selected ghost already covers that index.
    let hover_ghost = interaction
        .hovered()
        .and_then(|i| wedges.get(i))
        .filter(|w| !w.is_selected)
        .map(|w| GhostDescriptor {
            wedge: w.clone(),
            fill: theme.resolve(ThemeRole::HoverBackground).to_string(),
        });

    let focus_ring = interaction
        .focused()
        .and_then(|i| wedges.get(i))
        .map(|w| FocusRing {
            key: w.key.clone(),
            path: w.path.clone(),
            color: theme.resolve(ThemeRole::FocusRing).to_string(),
            stroke_width: FOCUS_RING_STROKE_WIDTH,
        });

    WheelScene {
        wedges,
        hub,
        selected_ghost,
        hover_ghost,
        focus_ring,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Command;

    fn options(keys: &[&str]) -> Vec<WheelOption> {
        keys.iter().map(|k| WheelOption::new(*k)).collect()
    }

    fn scene(
        options: &[WheelOption],
        value: Option<&str>,
        interaction: &InteractionState,
    ) -> WheelScene {
        layout_scene(
            options,
            value,
            &LayoutParams::default(),
            &Theme::default(),
            &HubText::default(),
            interaction,
        )
    }

    #[test]
    fn test_sectors_partition_the_circle_exactly() {
        for n in 3..=8 {
            let opts: Vec<WheelOption> =
                (0..n).map(|i| WheelOption::new(format!("k{i}"))).collect();
            let scene = scene(&opts, None, &InteractionState::new());

            assert_eq!(scene.wedges.len(), n);
            let step = 360.0 / n as f64;
            let mut total = 0.0;
            for (i, w) in scene.wedges.iter().enumerate() {
                assert!((w.end_angle - w.start_angle - step).abs() < 1e-9);
                // No gaps or overlaps: each wedge starts where the previous ended.
                assert!((w.start_angle - i as f64 * step).abs() < 1e-9);
                total += w.end_angle - w.start_angle;
            }
            assert!((total - 360.0).abs() < 1e-9, "n={n}: spans sum to {total}");
        }
    }

    #[test]
    fn test_exactly_one_wedge_selected_when_value_matches() {
        let opts = options(&["a", "b", "c"]);
        let scene = scene(&opts, Some("b"), &InteractionState::new());
        let selected: Vec<&WedgeDescriptor> =
            scene.wedges.iter().filter(|w| w.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].key, "b");
        assert_eq!(selected[0].stroke_width, 4.0);
    }

    #[test]
    fn test_no_wedge_selected_when_value_absent() {
        let opts = options(&["a", "b", "c"]);
        let scene = scene(&opts, Some("z"), &InteractionState::new());
        assert!(scene.wedges.iter().all(|w| !w.is_selected));
        assert!(scene.selected_ghost.is_none());
    }

    #[test]
    fn test_nine_options_still_yield_nine_wedges() {
        let opts: Vec<WheelOption> =
            (0..9).map(|i| WheelOption::new(format!("k{i}"))).collect();
        let scene = scene(&opts, None, &InteractionState::new());
        assert_eq!(scene.wedges.len(), 9);
        assert!((scene.wedges[8].end_angle - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_under_three_options_use_three_sectors() {
        let opts = options(&["a", "b"]);
        let scene = scene(&opts, None, &InteractionState::new());
        assert_eq!(scene.wedges.len(), 2);
        assert!((scene.wedges[0].end_angle - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_image_size_scales_with_diameter() {
        let opts = vec![
            WheelOption::new("a").image("/a.png"),
            WheelOption::new("b"),
            WheelOption::new("c"),
        ];
        let big = LayoutParams {
            diameter: 840.0,
            ..LayoutParams::default()
        };
        let scene = layout_scene(
            &opts,
            Some("a"),
            &big,
            &Theme::default(),
            &HubText::default(),
            &InteractionState::new(),
        );
        // Selected base 110, unselected 85, both doubled at 840 vs 420.
        assert_eq!(scene.wedges[0].image_size, 220.0);
        assert_eq!(scene.wedges[1].image_size, 170.0);
    }

    #[test]
    fn test_image_slot_is_centered_on_mid_angle_mid_radius() {
        let opts = options(&["a", "b", "c", "d"]);
        let params = LayoutParams::default();
        let scene = scene(&opts, None, &InteractionState::new());
        let w = &scene.wedges[0];

        let mid = polar_to_cartesian(
            (params.diameter / 2.0) * (params.inner_ratio + params.outer_ratio) / 2.0,
            45.0,
            params.diameter / 2.0,
            params.diameter / 2.0,
        );
        assert!((w.image_x + w.image_size / 2.0 - mid.x).abs() < 1e-9);
        assert!((w.image_y + w.image_size / 2.0 - mid.y).abs() < 1e-9);
    }

    #[test]
    fn test_hub_shows_selected_image_else_fallback_text() {
        let opts = vec![
            WheelOption::new("a").image("/a.png"),
            WheelOption::new("b"),
            WheelOption::new("c"),
        ];
        let with_selection = scene(&opts, Some("a"), &InteractionState::new());
        assert_eq!(with_selection.hub.image.as_deref(), Some("/a.png"));
        assert!(with_selection.hub.lines.is_empty());

        let without = scene(&opts, None, &InteractionState::new());
        assert_eq!(without.hub.image, None);
        assert_eq!(without.hub.lines, ["SELECT", "YOUR", "OPTION"]);
        assert_eq!(without.hub.radius, 84.0);
    }

    #[test]
    fn test_selected_ghost_always_present_with_selection() {
        let opts = options(&["a", "b", "c"]);
        let scene = scene(&opts, Some("c"), &InteractionState::new());
        let ghost = scene.selected_ghost.expect("selected ghost");
        assert_eq!(ghost.wedge.key, "c");
        // Default theme: selected hover cascades to the selected background.
        assert_eq!(ghost.fill, "#f0f0f0");
    }

    #[test]
    fn test_hover_ghost_suppressed_on_the_selected_wedge() {
        let opts = options(&["a", "b", "c"]);
        let mut interaction = InteractionState::new();
        interaction.pointer_enter(1);

        let hovering_selected = scene(&opts, Some("b"), &interaction);
        assert!(hovering_selected.hover_ghost.is_none());
        assert!(hovering_selected.selected_ghost.is_some());

        let hovering_other = scene(&opts, Some("a"), &interaction);
        let ghost = hovering_other.hover_ghost.expect("hover ghost");
        assert_eq!(ghost.wedge.key, "b");
    }

    #[test]
    fn test_focus_ring_traces_the_focused_wedge() {
        let opts = options(&["a", "b", "c"]);
        let mut interaction = InteractionState::new();
        interaction.apply(Command::Next, 3);
        interaction.apply(Command::Next, 3);

        let scene = scene(&opts, None, &interaction);
        let ring = scene.focus_ring.expect("focus ring");
        assert_eq!(ring.key, "b");
        assert_eq!(ring.path, scene.wedges[1].path);
        assert_eq!(ring.color, "#007bff");
    }

    #[test]
    fn test_stale_indices_produce_no_overlays() {
        let opts = options(&["a", "b", "c"]);
        let mut interaction = InteractionState::new();
        interaction.pointer_enter(9);
        let scene = scene(&opts, None, &interaction);
        assert!(scene.hover_ghost.is_none());
        assert!(scene.focus_ring.is_none());
    }

    #[test]
    fn test_label_falls_back_to_key() {
        let opts = vec![
            WheelOption::new("a").label("Ay"),
            WheelOption::new("b"),
            WheelOption::new("c"),
        ];
        let scene = scene(&opts, None, &InteractionState::new());
        assert_eq!(scene.wedges[0].label, "Ay");
        assert_eq!(scene.wedges[1].label, "b");
    }

    #[test]
    fn test_scene_is_deterministic() {
        let opts = vec![
            WheelOption::new("a").image("/a.png"),
            WheelOption::new("b").label("Bee"),
            WheelOption::new("c"),
            WheelOption::new("d"),
        ];
        let mut interaction = InteractionState::new();
        interaction.pointer_enter(2);
        interaction.apply(Command::Next, 4);

        let first = scene(&opts, Some("a"), &interaction);
        let second = scene(&opts, Some("a"), &interaction);
        assert_eq!(first, second);
    }

    #[test]
    fn test_theme_roles_flow_into_descriptors() {
        let theme = Theme {
            selected_background: Some("#111111".to_string()),
            wedge_background: Some("#222222".to_string()),
            hover_background: Some("#333333".to_string()),
            ..Theme::default()
        };
        let opts = options(&["a", "b", "c"]);
        let mut interaction = InteractionState::new();
        interaction.pointer_enter(2);

        let scene = layout_scene(
            &opts,
            Some("a"),
            &LayoutParams::default(),
            &theme,
            &HubText::default(),
            &interaction,
        );
        assert_eq!(scene.wedges[0].fill, "#111111");
        assert_eq!(scene.wedges[1].fill, "#222222");
        assert_eq!(scene.hover_ghost.as_ref().unwrap().fill, "#333333");
        // Selected hover unset, cascades to the selected background.
        assert_eq!(scene.selected_ghost.as_ref().unwrap().fill, "#111111");
    }
}
