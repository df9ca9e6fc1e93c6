use approx::assert_relative_eq;

use heatmap_rs::interaction::{
    TOOLTIP_OFFSET_X_PX, TOOLTIP_OFFSET_Y_PX, TooltipContent, TooltipFadeConfig, TooltipState,
};

fn january_content() -> TooltipContent {
    TooltipContent::for_cell(2000, "January", 7.5, -0.5)
}

#[test]
fn tooltip_markup_matches_the_reference_format() {
    assert_eq!(january_content().to_html(), "2000 - January<br>7.5°C<br>-0.5°C");
}

#[test]
fn temperatures_are_rounded_to_one_decimal() {
    let content = TooltipContent::for_cell(1910, "March", 8.161, -0.499);
    assert_eq!(content.temperature_line, "8.2°C");
    assert_eq!(content.variance_line, "-0.5°C");
}

#[test]
fn hover_positions_the_tooltip_near_the_pointer() {
    let mut tooltip = TooltipState::default();
    tooltip.on_cell_enter(january_content(), 2000, 400.0, 300.0);

    assert_eq!(
        tooltip.position(),
        (400.0 + TOOLTIP_OFFSET_X_PX, 300.0 + TOOLTIP_OFFSET_Y_PX)
    );
    assert_eq!(tooltip.data_year(), Some(2000));
    assert_eq!(
        tooltip.content().expect("content").to_html(),
        "2000 - January<br>7.5°C<br>-0.5°C"
    );
}

#[test]
fn fade_in_reaches_hover_opacity_after_its_duration() {
    let mut tooltip = TooltipState::default();
    tooltip.on_cell_enter(january_content(), 2000, 0.0, 0.0);

    let transition = tooltip.active_transition().expect("fade-in running");
    assert_eq!(transition.duration_ms(), 100.0);
    assert_eq!(transition.target_opacity(), 0.9);

    tooltip.advance(50.0);
    assert_relative_eq!(tooltip.opacity(), 0.45, max_relative = 1e-9);

    tooltip.advance(50.0);
    assert_relative_eq!(tooltip.opacity(), 0.9, max_relative = 1e-9);
    assert!(!tooltip.is_fading());
}

#[test]
fn fade_out_starts_from_the_current_opacity() {
    let mut tooltip = TooltipState::default();
    tooltip.on_cell_enter(january_content(), 2000, 0.0, 0.0);
    tooltip.advance(100.0);

    tooltip.on_cell_leave();
    let transition = tooltip.active_transition().expect("fade-out running");
    assert_eq!(transition.duration_ms(), 300.0);
    assert_eq!(transition.target_opacity(), 0.0);

    tooltip.advance(150.0);
    assert_relative_eq!(tooltip.opacity(), 0.45, max_relative = 1e-9);

    tooltip.advance(150.0);
    assert_eq!(tooltip.opacity(), 0.0);
}

#[test]
fn interrupted_fade_out_resumes_from_where_it_was() {
    let mut tooltip = TooltipState::default();
    tooltip.on_cell_enter(january_content(), 2000, 0.0, 0.0);
    tooltip.advance(100.0);
    tooltip.on_cell_leave();
    tooltip.advance(150.0);

    // Re-hover mid fade-out: fade-in restarts from 0.45, not from zero.
    tooltip.on_cell_enter(january_content(), 2000, 0.0, 0.0);
    assert_relative_eq!(tooltip.opacity(), 0.45, max_relative = 1e-9);
    tooltip.advance(50.0);
    assert_relative_eq!(tooltip.opacity(), 0.675, max_relative = 1e-9);
    tooltip.advance(50.0);
    assert_relative_eq!(tooltip.opacity(), 0.9, max_relative = 1e-9);
}

#[test]
fn new_hover_overwrites_content_and_year() {
    let mut tooltip = TooltipState::default();
    tooltip.on_cell_enter(january_content(), 2000, 0.0, 0.0);
    tooltip.on_cell_enter(
        TooltipContent::for_cell(1954, "August", 9.3, 0.6),
        1954,
        10.0,
        10.0,
    );

    assert_eq!(tooltip.data_year(), Some(1954));
    assert_eq!(
        tooltip.content().expect("content").to_html(),
        "1954 - August<br>9.3°C<br>0.6°C"
    );
}

#[test]
fn zero_duration_fades_apply_immediately() {
    let fade = TooltipFadeConfig {
        fade_in_ms: 0.0,
        hover_opacity: 0.9,
        fade_out_ms: 0.0,
    };
    let mut tooltip = TooltipState::new(fade);

    tooltip.on_cell_enter(january_content(), 2000, 0.0, 0.0);
    assert_eq!(tooltip.opacity(), 0.9);
    assert!(!tooltip.is_fading());

    tooltip.on_cell_leave();
    assert_eq!(tooltip.opacity(), 0.0);
}

#[test]
fn invalid_fade_config_is_rejected() {
    let fade = TooltipFadeConfig {
        fade_in_ms: -1.0,
        hover_opacity: 0.9,
        fade_out_ms: 300.0,
    };
    assert!(fade.validate().is_err());

    let fade = TooltipFadeConfig {
        fade_in_ms: 100.0,
        hover_opacity: 1.5,
        fade_out_ms: 300.0,
    };
    assert!(fade.validate().is_err());
}
