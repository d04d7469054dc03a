use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Line, Points};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const FOOD_COLOR: Color = Color::Rgb(100, 255, 100);
const ANIMAL_COLOR: Color = Color::Rgb(255, 215, 0);

/// A shape in logical pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { x: f64, y: f64, radius: f64 },
    Triangle { vertices: [(f64, f64); 3] },
}

/// Paints shapes from a `width` × `height` logical area onto a braille
/// canvas filling the widget.
pub struct ArenaWidget<'a> {
    shapes: &'a [Shape],
    width: f64,
    height: f64,
    title: String,
}

impl<'a> ArenaWidget<'a> {
    pub fn new(shapes: &'a [Shape], width: f64, height: f64) -> Self {
        Self {
            shapes,
            width,
            height,
            title: String::from(" Forage "),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Canvas y grows upwards.
    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }
}

impl Widget for ArenaWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title(self.title.as_str()))
            .marker(Marker::Braille)
            .x_bounds([0.0, self.width])
            .y_bounds([0.0, self.height])
            .paint(|ctx| {
                for shape in self.shapes {
                    match *shape {
                        Shape::Circle { x, y, radius } => {
                            let y = self.flip(y);
                            ctx.draw(&Points {
                                coords: &[(x, y)],
                                color: FOOD_COLOR,
                            });
                            ctx.draw(&Circle {
                                x,
                                y,
                                radius,
                                color: FOOD_COLOR,
                            });
                        }
                        Shape::Triangle { vertices } => {
                            for i in 0..3 {
                                let (x1, y1) = vertices[i];
                                let (x2, y2) = vertices[(i + 1) % 3];
                                ctx.draw(&Line {
                                    x1,
                                    y1: self.flip(y1),
                                    x2,
                                    y2: self.flip(y2),
                                    color: ANIMAL_COLOR,
                                });
                            }
                        }
                    }
                }
            });

        canvas.render(area, buf);
    }
}

/// The most recent training lines, newest at the bottom.
pub struct TrainingLogWidget<'a> {
    lines: &'a [String],
    footer: &'a str,
}

impl<'a> TrainingLogWidget<'a> {
    pub fn new(lines: &'a [String], footer: &'a str) -> Self {
        Self { lines, footer }
    }
}

impl Widget for TrainingLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Training ");
        let visible = block.inner(area).height.saturating_sub(1) as usize;
        let skip = self.lines.len().saturating_sub(visible);

        let mut text: Vec<TextLine> = self.lines[skip..]
            .iter()
            .map(|line| TextLine::from(line.as_str()))
            .collect();
        text.push(TextLine::styled(
            self.footer,
            Style::default().fg(Color::DarkGray),
        ));

        Paragraph::new(text).block(block).render(area, buf);
    }
}
