use std::sync::Arc;

use forage_core::Metrics;
use forage_tui::{ArenaWidget, Shape, TrainingLogWidget};
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout};
use ratatui::Terminal;

use super::training_log::TrainingLog;
use crate::driver::surface::{triangle_vertices, RenderTarget};
use crate::driver::viewport::SurfaceDimensions;
use crate::error::{DriverError, Result};

const LOG_HEIGHT: u16 = 8;
const FOOTER: &str = "t: train  q: quit";

/// Collects a frame's shapes and paints them all on `present`.
///
/// Terminal cells have no pixel density, so the device pixel scale is
/// ignored; only the logical size is used to fit the arena to the screen.
pub struct TerminalSurface<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    shapes: Vec<Shape>,
    width: f64,
    height: f64,
    log: TrainingLog,
    metrics: Option<Arc<Metrics>>,
}

impl<'a, B: Backend> TerminalSurface<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, log: TrainingLog) -> Self {
        Self {
            terminal,
            shapes: Vec::new(),
            width: 1.0,
            height: 1.0,
            log,
            metrics: None,
        }
    }

    /// Shows the loop's counters in the arena title.
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    fn title(&self) -> String {
        match &self.metrics {
            Some(metrics) => format!(
                " Forage | steps {} | animals {} | foods {} | generations {} ",
                metrics.step_count(),
                metrics.animal_count(),
                metrics.food_count(),
                metrics.generation_count()
            ),
            None => String::from(" Forage "),
        }
    }
}

impl<B: Backend> RenderTarget for TerminalSurface<'_, B> {
    fn configure(&mut self, dims: &SurfaceDimensions, _scale: f64) -> Result<()> {
        self.width = dims.css_width;
        self.height = dims.css_height;
        self.terminal
            .clear()
            .map_err(|e| DriverError::surface(format!("failed to clear terminal: {e}")))
    }

    fn clear(&mut self, _width: f64, _height: f64) -> Result<()> {
        self.shapes.clear();
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        self.shapes.push(Shape::Circle { x, y, radius });
        Ok(())
    }

    fn draw_triangle(&mut self, x: f64, y: f64, size: f64, rotation: f64) -> Result<()> {
        self.shapes.push(Shape::Triangle {
            vertices: triangle_vertices(x, y, size, rotation),
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let title = self.title();
        let lines = self.log.lines();
        let shapes = &self.shapes;
        let (width, height) = (self.width, self.height);

        self.terminal
            .draw(|f| {
                let [arena, log] =
                    Layout::vertical([Constraint::Min(3), Constraint::Length(LOG_HEIGHT)])
                        .areas(f.area());
                f.render_widget(ArenaWidget::new(shapes, width, height).title(title), arena);
                f.render_widget(TrainingLogWidget::new(&lines, FOOTER), log);
            })
            .map_err(|e| DriverError::surface(format!("failed to draw frame: {e}")))?;
        Ok(())
    }
}
