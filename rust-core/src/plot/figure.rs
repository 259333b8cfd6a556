//! Figure model and rasterisation with plotters
//!
//! The default `fonts` feature renders text (title, panel captions, tick
//! labels) with an embedded DejaVu Sans through plotters' `ab_glyph` backend,
//! so no system font lookup happens. Building with `--no-default-features`
//! drops the text: the raster then holds the traces, a plain grid and the
//! panel frames.

use super::PlotError;
use crate::spectrum::Spectrum;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::info;

#[cfg(feature = "fonts")]
const FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

#[cfg(not(feature = "fonts"))]
const GRID_DIVISIONS: usize = 10;
const TRACE_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);

/// One chart in a figure
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// (x, y) points joined by a line, in x order
    pub points: Vec<(f64, f64)>,
}

impl Panel {
    /// Plot range of the x values, widened when degenerate
    pub fn x_range(&self) -> Range<f64> {
        padded_range(self.points.iter().map(|&(x, _)| x), 0.0)
    }

    /// Plot range of the y values with a 5% margin
    pub fn y_range(&self) -> Range<f64> {
        padded_range(self.points.iter().map(|&(_, y)| y), 0.05)
    }
}

/// Time-domain trace stacked above the frequency-domain trace
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub time_domain: Panel,
    pub frequency_domain: Panel,

    /// Spectrum behind the bottom panel
    pub spectrum: Spectrum,
}

impl Figure {
    /// Both panels, top first
    pub fn panels(&self) -> [&Panel; 2] {
        [&self.time_domain, &self.frequency_domain]
    }

    /// Rasterise the figure to an image file
    ///
    /// # Arguments
    /// * `path` - Output file; its extension selects the encoder (`png`,
    ///   `jpg`/`jpeg` or `bmp`), anything else is a `Render` error
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        self.draw_on(BitMapBackend::new(path, (self.width, self.height)).into_drawing_area())?;
        info!(path = %path.display(), width = self.width, height = self.height, "saved figure");

        Ok(())
    }

    /// Rasterise the figure into a `width * height * 3` RGB buffer, row major
    pub fn to_rgb(&self) -> Result<Vec<u8>, PlotError> {
        let mut buffer = vec![0u8; self.width as usize * self.height as usize * 3];
        self.draw_on(
            BitMapBackend::with_buffer(&mut buffer, (self.width, self.height)).into_drawing_area(),
        )?;

        Ok(buffer)
    }

    fn draw_on<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), PlotError> {
        root.fill(&WHITE).map_err(render_error)?;

        #[cfg(feature = "fonts")]
        let root = {
            register_fonts()?;
            root.titled(&self.title, ("sans-serif", 28))
                .map_err(render_error)?
        };

        let areas = root.split_evenly((2, 1));
        for (area, panel) in areas.iter().zip(self.panels()) {
            draw_panel(area, panel)?;
        }

        root.present().map_err(render_error)
    }
}

/// Make the embedded font available as "sans-serif", once per process
#[cfg(feature = "fonts")]
fn register_fonts() -> Result<(), PlotError> {
    use std::sync::OnceLock;

    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let registered = *REGISTERED.get_or_init(|| {
        plotters::style::register_font("sans-serif", FontStyle::Normal, FONT_DATA).is_ok()
    });

    if registered {
        Ok(())
    } else {
        Err(PlotError::Render("embedded font could not be parsed".to_string()))
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
) -> Result<(), PlotError> {
    let x_range = panel.x_range();
    let y_range = panel.y_range();

    let mut builder = ChartBuilder::on(area);
    builder.margin(20);

    #[cfg(feature = "fonts")]
    builder
        .caption(&panel.title, ("sans-serif", 20))
        .x_label_area_size(40)
        .y_label_area_size(60);

    let mut chart = builder
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(render_error)?;

    #[cfg(feature = "fonts")]
    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .light_line_style(GRID_COLOR)
        .draw()
        .map_err(render_error)?;

    #[cfg(not(feature = "fonts"))]
    chart
        .draw_series(grid_lines(&x_range, &y_range))
        .map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(
            panel.points.iter().copied(),
            TRACE_COLOR.stroke_width(1),
        ))
        .map_err(render_error)?;

    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x_range.start, y_range.start), (x_range.end, y_range.end)],
            BLACK.stroke_width(1),
        )))
        .map_err(render_error)?;

    Ok(())
}

#[cfg(not(feature = "fonts"))]
fn grid_lines(x: &Range<f64>, y: &Range<f64>) -> Vec<PathElement<(f64, f64)>> {
    let step = |range: &Range<f64>, i: usize| {
        range.start + (range.end - range.start) * i as f64 / GRID_DIVISIONS as f64
    };

    (0..=GRID_DIVISIONS)
        .flat_map(|i| {
            let gx = step(x, i);
            let gy = step(y, i);
            [
                PathElement::new(vec![(gx, y.start), (gx, y.end)], GRID_COLOR),
                PathElement::new(vec![(x.start, gy), (x.end, gy)], GRID_COLOR),
            ]
        })
        .collect()
}

fn render_error<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

/// Min..max of `values`, padded by `margin` of the span; a zero span becomes ±1
fn padded_range(values: impl Iterator<Item = f64>, margin: f64) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }

    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 1.0)..(hi + 1.0);
    }

    (lo - span * margin)..(hi + span * margin)
}
