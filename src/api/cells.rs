use crate::api::frame_builder::FrameContext;
use crate::data::MonthlyVariance;
use crate::error::{ChartError, ChartResult};
use crate::render::CellPrimitive;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_MIN_RECORDS: usize = 2_048;

/// Projects every dataset record into one positioned, colored cell.
///
/// Cell width divides the plot span into `year_span + 1` columns so the
/// final year keeps a full column; cell height is the month bandwidth.
pub(crate) fn project_cells(ctx: &FrameContext<'_>) -> ChartResult<Vec<CellPrimitive>> {
    let records = &ctx.dataset.monthly_variance;

    #[cfg(feature = "parallel-projection")]
    if records.len() >= PARALLEL_PROJECTION_MIN_RECORDS {
        return records
            .par_iter()
            .map(|record| project_cell(ctx, *record))
            .collect();
    }

    records
        .iter()
        .map(|record| project_cell(ctx, *record))
        .collect()
}

fn project_cell(ctx: &FrameContext<'_>, record: MonthlyVariance) -> ChartResult<CellPrimitive> {
    let plot_width = ctx.layout.plot_width();
    let plot_height = ctx.layout.plot_height();
    let (min_year, max_year) = ctx.year_range;
    let year_span = f64::from(max_year - min_year);

    let x = ctx
        .x_scale
        .domain_to_pixel(f64::from(record.year), plot_width)?;
    let y = ctx.y_scale.offset(&record.month_label()?, plot_height)?;
    let width = plot_width / (year_span + 1.0);
    let height = ctx.y_scale.bandwidth(plot_height)?;

    let absolute = ctx.dataset.absolute_temperature(record);
    let bucket = ctx.color_scale.bucket_index(absolute)?;
    let fill = *ctx
        .config
        .palette
        .get(bucket)
        .ok_or_else(|| ChartError::InvalidData(format!("no palette color for bucket {bucket}")))?;

    Ok(CellPrimitive::new(
        x,
        y,
        width,
        height,
        fill,
        record.year,
        record.month_zero_based(),
        format!("{absolute:.1}"),
    ))
}
