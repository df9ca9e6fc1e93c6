use heatmap_rs::api::{DEFAULT_PALETTE, HeatmapConfig, HeatmapEngine};
use heatmap_rs::core::{Margins, Viewport};
use heatmap_rs::data::{MonthlyVariance, TemperatureDataset};
use heatmap_rs::render::NullRenderer;

fn record(year: i32, month: u32, variance: f64) -> MonthlyVariance {
    MonthlyVariance {
        year,
        month,
        variance,
    }
}

fn dataset() -> TemperatureDataset {
    TemperatureDataset {
        base_temperature: 8.0,
        monthly_variance: vec![
            record(2000, 1, -1.0),
            record(2000, 2, 0.2),
            record(2001, 1, 0.6),
            record(2001, 2, 1.0),
        ],
    }
}

fn engine() -> HeatmapEngine<NullRenderer> {
    HeatmapEngine::new(NullRenderer::default(), HeatmapConfig::default(), dataset())
        .expect("engine init")
}

#[test]
fn invalid_viewport_is_rejected() {
    let config = HeatmapConfig::default().with_viewport(Viewport::new(0, 0));
    assert!(HeatmapEngine::new(NullRenderer::default(), config, dataset()).is_err());
}

#[test]
fn margins_wider_than_the_viewport_are_rejected() {
    let config = HeatmapConfig::default()
        .with_viewport(Viewport::new(100, 100))
        .with_margins(Margins::new(60.0, 60.0, 60.0, 60.0));
    assert!(HeatmapEngine::new(NullRenderer::default(), config, dataset()).is_err());
}

#[test]
fn empty_palette_is_rejected() {
    let config = HeatmapConfig::default().with_palette(Vec::new());
    assert!(HeatmapEngine::new(NullRenderer::default(), config, dataset()).is_err());
}

#[test]
fn render_reports_counts_through_the_backend() {
    let mut engine = engine();
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_cell_count, 4);
    assert!(renderer.last_line_count > 0);
    assert!(renderer.last_rect_count > 0);
    assert!(renderer.last_text_count > 0);
}

#[test]
fn extent_endpoints_map_to_edge_palette_colors() {
    let engine = engine();
    let (min_temperature, max_temperature) = engine.temperature_extent();

    assert_eq!(
        engine.color_for_temperature(min_temperature).expect("color"),
        DEFAULT_PALETTE[0]
    );
    assert_eq!(
        engine.color_for_temperature(max_temperature).expect("color"),
        DEFAULT_PALETTE[10]
    );
}

#[test]
fn record_lookup_matches_cell_geometry() {
    let engine = engine();
    let layout = engine.layout();
    let plot_width = layout.plot_width();
    let plot_height = layout.plot_height();

    // First column, first band.
    let record = engine
        .record_at(plot_width * 0.25, plot_height * 0.25)
        .expect("hit test")
        .expect("record under pointer");
    assert_eq!((record.year, record.month), (2000, 1));

    // Final-year column, second band. The 2001 column starts at the right
    // plot edge and extends one cell width past it.
    let record = engine
        .record_at(plot_width * 1.25, plot_height * 0.75)
        .expect("hit test")
        .expect("record under pointer");
    assert_eq!((record.year, record.month), (2001, 2));

    // Outside the plot area.
    assert!(
        engine
            .record_at(-10.0, plot_height * 0.25)
            .expect("hit test")
            .is_none()
    );
    assert!(
        engine
            .record_at(plot_width * 0.25, plot_height + 1.0)
            .expect("hit test")
            .is_none()
    );
}

#[test]
fn pointer_flow_drives_the_tooltip() {
    let mut engine = engine();
    let layout = engine.layout();
    let plot_x = layout.plot_width() * 0.25;
    let plot_y = layout.plot_height() * 0.25;

    engine
        .pointer_move(plot_x, plot_y, 500.0, 400.0)
        .expect("pointer move");
    assert_eq!(engine.tooltip().data_year(), Some(2000));
    assert_eq!(engine.tooltip().position(), (505.0, 320.0));
    assert_eq!(
        engine.tooltip().content().expect("content").to_html(),
        "2000 - January<br>7.0°C<br>-1.0°C"
    );

    engine.advance_tooltip(100.0);
    assert_eq!(engine.tooltip().opacity(), 0.9);

    // Moving within the same cell restarts nothing.
    engine
        .pointer_move(plot_x + 1.0, plot_y + 1.0, 501.0, 401.0)
        .expect("pointer move");
    assert!(!engine.tooltip().is_fading());
    assert_eq!(engine.tooltip().position(), (505.0, 320.0));

    engine.pointer_leave();
    assert!(engine.tooltip().is_fading());
    engine.advance_tooltip(300.0);
    assert_eq!(engine.tooltip().opacity(), 0.0);
}

#[test]
fn pointer_in_a_column_gap_unhovers() {
    let mut engine = engine();
    let layout = engine.layout();
    let plot_width = layout.plot_width();
    let plot_y = layout.plot_height() * 0.25;

    engine
        .pointer_move(plot_width * 0.25, plot_y, 0.0, 0.0)
        .expect("pointer move");
    assert_eq!(engine.tooltip().data_year(), Some(2000));

    // Between the year-2000 column (ends at width/2) and the year-2001
    // column (starts at width).
    engine
        .pointer_move(plot_width * 0.75, plot_y, 0.0, 0.0)
        .expect("pointer move");
    assert!(engine.tooltip().is_fading());
    assert_eq!(
        engine.tooltip().active_transition().expect("fade").target_opacity(),
        0.0
    );
}
