use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Tuning for the tooltip fade transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipFadeConfig {
    /// Hover fade-in duration.
    pub fade_in_ms: f64,
    /// Opacity the tooltip settles at while hovering.
    pub hover_opacity: f64,
    /// Unhover fade-out duration.
    pub fade_out_ms: f64,
}

impl Default for TooltipFadeConfig {
    fn default() -> Self {
        Self {
            fade_in_ms: 100.0,
            hover_opacity: 0.9,
            fade_out_ms: 300.0,
        }
    }
}

impl TooltipFadeConfig {
    pub fn validate(self) -> ChartResult<()> {
        if !self.fade_in_ms.is_finite()
            || !self.fade_out_ms.is_finite()
            || self.fade_in_ms < 0.0
            || self.fade_out_ms < 0.0
        {
            return Err(ChartError::InvalidData(
                "fade durations must be finite and >= 0".to_owned(),
            ));
        }
        if !self.hover_opacity.is_finite() || !(0.0..=1.0).contains(&self.hover_opacity) {
            return Err(ChartError::InvalidData(
                "hover opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One restartable, time-based opacity transition.
///
/// Transitions do not own a clock; hosts sample them with elapsed time, so
/// behavior stays deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadeTransition {
    start_opacity: f64,
    target_opacity: f64,
    duration_ms: f64,
}

impl FadeTransition {
    #[must_use]
    pub fn new(start_opacity: f64, target_opacity: f64, duration_ms: f64) -> Self {
        Self {
            start_opacity,
            target_opacity,
            duration_ms,
        }
    }

    #[must_use]
    pub fn target_opacity(self) -> f64 {
        self.target_opacity
    }

    #[must_use]
    pub fn duration_ms(self) -> f64 {
        self.duration_ms
    }

    /// Linear opacity sample at `elapsed_ms` since the transition restart.
    #[must_use]
    pub fn opacity_at(self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return self.target_opacity;
        }
        if elapsed_ms <= 0.0 {
            return self.start_opacity;
        }

        let ratio = elapsed_ms / self.duration_ms;
        self.start_opacity + (self.target_opacity - self.start_opacity) * ratio
    }

    #[must_use]
    pub fn is_complete(self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Tooltip text for one hovered cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub heading: String,
    pub temperature_line: String,
    pub variance_line: String,
}

impl TooltipContent {
    #[must_use]
    pub fn for_cell(year: i32, month_label: &str, absolute_temperature: f64, variance: f64) -> Self {
        Self {
            heading: format!("{year} - {month_label}"),
            temperature_line: format!("{absolute_temperature:.1}°C"),
            variance_line: format!("{variance:.1}°C"),
        }
    }

    /// The markup shown inside the tooltip element.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "{}<br>{}<br>{}",
            self.heading, self.temperature_line, self.variance_line
        )
    }
}

/// Pointer offsets between the page position and the tooltip corner.
pub const TOOLTIP_OFFSET_X_PX: f64 = 5.0;
pub const TOOLTIP_OFFSET_Y_PX: f64 = -80.0;

/// The single tooltip element's state machine.
///
/// There is exactly one tooltip; every hover overwrites its content and
/// restarts a fade-in, every unhover restarts a fade-out. A restart samples
/// the current opacity first, so a quick hover/unhover sequence fades from
/// wherever the previous transition left off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    fade: TooltipFadeConfig,
    content: Option<TooltipContent>,
    data_year: Option<i32>,
    left_px: f64,
    top_px: f64,
    opacity: f64,
    transition: Option<FadeTransition>,
    transition_elapsed_ms: f64,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new(TooltipFadeConfig::default())
    }
}

impl TooltipState {
    #[must_use]
    pub fn new(fade: TooltipFadeConfig) -> Self {
        Self {
            fade,
            content: None,
            data_year: None,
            left_px: 0.0,
            top_px: 0.0,
            opacity: 0.0,
            transition: None,
            transition_elapsed_ms: 0.0,
        }
    }

    #[must_use]
    pub fn fade_config(&self) -> TooltipFadeConfig {
        self.fade
    }

    #[must_use]
    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn data_year(&self) -> Option<i32> {
        self.data_year
    }

    /// Tooltip corner position in page coordinates.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.left_px, self.top_px)
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn active_transition(&self) -> Option<FadeTransition> {
        self.transition
    }

    /// Hover: overwrite content and restart the fade-in.
    pub fn on_cell_enter(
        &mut self,
        content: TooltipContent,
        data_year: i32,
        page_x: f64,
        page_y: f64,
    ) {
        self.content = Some(content);
        self.data_year = Some(data_year);
        self.left_px = page_x + TOOLTIP_OFFSET_X_PX;
        self.top_px = page_y + TOOLTIP_OFFSET_Y_PX;
        self.restart_transition(self.fade.hover_opacity, self.fade.fade_in_ms);
    }

    /// Unhover: restart the fade-out. Content stays until the next hover.
    pub fn on_cell_leave(&mut self) {
        self.restart_transition(0.0, self.fade.fade_out_ms);
    }

    /// Advances the active transition by `delta_ms` of host time.
    pub fn advance(&mut self, delta_ms: f64) {
        let Some(transition) = self.transition else {
            return;
        };
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return;
        }

        self.transition_elapsed_ms += delta_ms;
        self.opacity = transition.opacity_at(self.transition_elapsed_ms);
        if transition.is_complete(self.transition_elapsed_ms) {
            self.transition = None;
        }
    }

    fn restart_transition(&mut self, target_opacity: f64, duration_ms: f64) {
        self.transition = Some(FadeTransition::new(self.opacity, target_opacity, duration_ms));
        self.transition_elapsed_ms = 0.0;
        if duration_ms <= 0.0 {
            self.opacity = target_opacity;
            self.transition = None;
        }
    }
}
