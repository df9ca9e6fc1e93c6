use tracing::debug;

use crate::api::HeatmapConfig;
use crate::api::frame_builder::{self, FrameContext};
use crate::core::{BandScale, ChartLayout, LinearScale, ThresholdScale};
use crate::data::{MonthlyVariance, TemperatureDataset, month_label};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{TooltipContent, TooltipState};
use crate::render::{Color, RenderFrame, Renderer};

/// Main orchestration facade consumed by host applications.
///
/// `HeatmapEngine` resolves the scales from the dataset once, builds render
/// frames for its backend, and routes pointer events into the tooltip state
/// machine.
pub struct HeatmapEngine<R: Renderer> {
    renderer: R,
    config: HeatmapConfig,
    dataset: TemperatureDataset,
    layout: ChartLayout,
    x_scale: LinearScale,
    y_scale: BandScale,
    color_scale: ThresholdScale,
    legend_scale: LinearScale,
    year_range: (i32, i32),
    temperature_extent: (f64, f64),
    tooltip: TooltipState,
    hovered: Option<(i32, u32)>,
}

impl<R: Renderer> HeatmapEngine<R> {
    pub fn new(
        renderer: R,
        config: HeatmapConfig,
        dataset: TemperatureDataset,
    ) -> ChartResult<Self> {
        config.validate()?;
        dataset.validate()?;

        let layout = config.layout()?;
        let (min_year, max_year) = dataset.year_range()?;
        let x_scale = LinearScale::from_extent(f64::from(min_year), f64::from(max_year))?;
        let y_scale = BandScale::new(dataset.month_labels()?)?;
        let (min_temperature, max_temperature) = dataset.temperature_extent()?;
        let color_scale =
            ThresholdScale::from_extent(min_temperature, max_temperature, config.palette.len())?;
        let legend_scale = LinearScale::from_extent(min_temperature, max_temperature)?;
        let tooltip = TooltipState::new(config.tooltip_fade);

        debug!(
            records = dataset.len(),
            min_year,
            max_year,
            min_temperature,
            max_temperature,
            "heatmap engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            layout,
            x_scale,
            y_scale,
            color_scale,
            legend_scale,
            year_range: (min_year, max_year),
            temperature_extent: (min_temperature, max_temperature),
            tooltip,
            hovered: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &TemperatureDataset {
        &self.dataset
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn year_range(&self) -> (i32, i32) {
        self.year_range
    }

    #[must_use]
    pub fn temperature_extent(&self) -> (f64, f64) {
        self.temperature_extent
    }

    #[must_use]
    pub fn color_scale(&self) -> &ThresholdScale {
        &self.color_scale
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Palette color of the bucket that holds `absolute_temperature`.
    pub fn color_for_temperature(&self, absolute_temperature: f64) -> ChartResult<Color> {
        let bucket = self.color_scale.bucket_index(absolute_temperature)?;
        self.config.palette.get(bucket).copied().ok_or_else(|| {
            ChartError::InvalidData(format!("no palette color for bucket {bucket}"))
        })
    }

    /// Materializes the scene without touching the backend.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        frame_builder::build(&self.frame_context())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        debug!(cells = frame.cells.len(), "rendering heatmap frame");
        self.renderer.render(&frame)
    }

    /// The dataset record under a plot-space position, if any.
    ///
    /// Inverts the year scale, then checks the pointer against the actual
    /// cell geometry; the gaps between cell columns hit nothing.
    pub fn record_at(&self, plot_x: f64, plot_y: f64) -> ChartResult<Option<MonthlyVariance>> {
        if !plot_x.is_finite() || !plot_y.is_finite() {
            return Ok(None);
        }

        let plot_width = self.layout.plot_width();
        let plot_height = self.layout.plot_height();
        let Some(label) = self.y_scale.label_at_pixel(plot_y, plot_height)? else {
            return Ok(None);
        };
        let Some(month) = month_number_for_label(label) else {
            return Ok(None);
        };

        let year = self
            .x_scale
            .pixel_to_domain(plot_x, plot_width)?
            .floor() as i32;
        let cell_left = self.x_scale.domain_to_pixel(f64::from(year), plot_width)?;
        let (min_year, max_year) = self.year_range;
        let cell_width = plot_width / (f64::from(max_year - min_year) + 1.0);
        if plot_x < cell_left || plot_x >= cell_left + cell_width {
            return Ok(None);
        }

        Ok(self
            .dataset
            .monthly_variance
            .iter()
            .copied()
            .find(|record| record.year == year && record.month == month))
    }

    /// Routes a pointer sample in plot space; `page_x`/`page_y` position the
    /// tooltip in page coordinates.
    ///
    /// Entering a cell overwrites the tooltip and restarts its fade-in;
    /// leaving all cells restarts the fade-out. Moving within one cell does
    /// not retrigger either transition.
    pub fn pointer_move(
        &mut self,
        plot_x: f64,
        plot_y: f64,
        page_x: f64,
        page_y: f64,
    ) -> ChartResult<()> {
        match self.record_at(plot_x, plot_y)? {
            Some(record) => {
                let key = (record.year, record.month);
                if self.hovered != Some(key) {
                    self.hovered = Some(key);
                    let content = TooltipContent::for_cell(
                        record.year,
                        &record.month_label()?,
                        self.dataset.absolute_temperature(record),
                        record.variance,
                    );
                    self.tooltip
                        .on_cell_enter(content, record.year, page_x, page_y);
                }
            }
            None => self.pointer_leave(),
        }
        Ok(())
    }

    pub fn pointer_leave(&mut self) {
        if self.hovered.take().is_some() {
            self.tooltip.on_cell_leave();
        }
    }

    /// Advances the tooltip fade by `delta_ms` of host time.
    pub fn advance_tooltip(&mut self, delta_ms: f64) {
        self.tooltip.advance(delta_ms);
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn frame_context(&self) -> FrameContext<'_> {
        FrameContext {
            config: &self.config,
            dataset: &self.dataset,
            layout: self.layout,
            x_scale: self.x_scale,
            y_scale: &self.y_scale,
            color_scale: &self.color_scale,
            legend_scale: self.legend_scale,
            year_range: self.year_range,
            temperature_extent: self.temperature_extent,
        }
    }
}

fn month_number_for_label(label: &str) -> Option<u32> {
    (1..=12).find(|month| {
        month_label(*month)
            .map(|candidate| candidate == label)
            .unwrap_or(false)
    })
}
