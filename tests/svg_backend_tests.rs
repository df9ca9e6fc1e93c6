use heatmap_rs::api::{HeatmapConfig, HeatmapEngine};
use heatmap_rs::data::{MonthlyVariance, TemperatureDataset};
use heatmap_rs::platform_web::HeatmapPage;
use heatmap_rs::render::SvgRenderer;

fn record(year: i32, month: u32, variance: f64) -> MonthlyVariance {
    MonthlyVariance {
        year,
        month,
        variance,
    }
}

fn reference_dataset() -> TemperatureDataset {
    TemperatureDataset {
        base_temperature: 8.0,
        monthly_variance: vec![record(2000, 1, -0.5), record(2001, 1, 0.5)],
    }
}

fn rendered_document() -> String {
    let mut engine = HeatmapEngine::new(
        SvgRenderer::new(),
        HeatmapConfig::default(),
        reference_dataset(),
    )
    .expect("engine init");
    engine.render().expect("render");
    engine.into_renderer().into_document().expect("document")
}

#[test]
fn document_has_the_chart_surface_and_margin_translation() {
    let document = rendered_document();

    assert!(document.contains("<svg class=\"map\""));
    assert!(document.contains("width=\"1400\""));
    assert!(document.contains("height=\"700\""));
    assert!(document.contains("<g transform=\"translate(150, 100)\">"));
}

#[test]
fn cells_expose_inspection_attributes() {
    let document = rendered_document();

    assert!(document.contains(
        "<rect class=\"cell\" data-month=\"0\" data-year=\"2000\" data-temp=\"7.5\""
    ));
    assert!(document.contains(
        "<rect class=\"cell\" data-month=\"0\" data-year=\"2001\" data-temp=\"8.5\""
    ));
}

#[test]
fn named_sections_become_identifiable_groups() {
    let document = rendered_document();

    assert!(document.contains("<g id=\"x-axis\">"));
    assert!(document.contains("<g id=\"y-axis\">"));
    assert!(document.contains("<g id=\"legend\">"));
    assert!(document.contains("id=\"title\""));
    assert!(document.contains("id=\"description\""));
}

#[test]
fn month_axis_title_is_rotated() {
    let document = rendered_document();
    assert!(document.contains("transform=\"rotate(-90,"));
    assert!(document.contains(">Months</text>"));
}

#[test]
fn render_stats_match_the_frame() {
    let mut engine = HeatmapEngine::new(
        SvgRenderer::new(),
        HeatmapConfig::default(),
        reference_dataset(),
    )
    .expect("engine init");
    let frame = engine.build_frame().expect("frame");
    engine.render().expect("render");

    let stats = engine.renderer().last_stats();
    assert_eq!(stats.cells_drawn, frame.cells.len());
    assert_eq!(stats.lines_drawn, frame.line_count());
    assert_eq!(stats.rects_drawn, frame.rect_count());
    assert_eq!(stats.texts_drawn, frame.text_count());
}

#[test]
fn rendering_twice_is_deterministic() {
    assert_eq!(rendered_document(), rendered_document());
}

#[test]
fn renderer_without_a_frame_has_no_document() {
    let renderer = SvgRenderer::new();
    assert!(renderer.document().is_none());
    assert!(renderer.into_document().is_err());
}

#[test]
fn page_hosts_the_svg_and_the_tooltip_element() {
    let document = rendered_document();
    let page = HeatmapPage::new(document.clone()).expect("page");
    let html = page.to_html();

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(&document));
    assert!(html.contains("<div id=\"tooltip\""));
    assert!(html.contains("opacity: 0"));
}

#[test]
fn empty_svg_document_is_rejected_by_the_page() {
    assert!(HeatmapPage::new(String::new()).is_err());
}
