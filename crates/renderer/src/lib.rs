//! Draws a [`PlotFrame`] onto an Iced canvas.
//!
//! The engine only hands out primitives; this crate owns every pixel
//! decision (colors, stroke widths, the panel behind the plot bounds).

use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Size};
use plot_core::{Axis, DrawSink, Label, PlotBounds, PlotFrame, Segment};
use plot_theme::Theme;

/// Canvas program drawing the latest frame of a plot.
///
/// Geometry is cached; the owner clears `cache` whenever the frame changes.
pub struct PlotCanvas<'a> {
    pub frame:  &'a PlotFrame,
    pub bounds: PlotBounds,
    pub theme:  &'a Theme,
    pub cache:  &'a Cache,
}

impl<'a, Message> canvas::Program<Message> for PlotCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let panel = Path::rectangle(
                Point::new(self.bounds.left(), self.bounds.top()),
                Size::new(self.bounds.width(), self.bounds.height()),
            );
            frame.fill(&panel, self.theme.panel.to_iced());

            let mut sink = FrameSink { frame, theme: self.theme };
            self.frame.emit(&mut sink);
        });

        vec![geometry]
    }
}

/// [`DrawSink`] writing into an Iced canvas [`Frame`].
pub struct FrameSink<'f, 't> {
    pub frame: &'f mut Frame,
    pub theme: &'t Theme,
}

impl DrawSink for FrameSink<'_, '_> {
    fn polyline(&mut self, vertices: &[plot_core::Point]) {
        let Some((first, rest)) = vertices.split_first() else {
            return;
        };

        let path = Path::new(|b| {
            b.move_to(to_iced(*first));
            for v in rest {
                b.line_to(to_iced(*v));
            }
        });

        self.frame.stroke(
            &path,
            Stroke::default()
                .with_color(self.theme.curve.to_iced())
                .with_width(self.theme.stroke.curve_width),
        );
    }

    fn grid(&mut self, _axis: Axis, segments: &[Segment]) {
        let stroke = Stroke::default()
            .with_color(self.theme.grid.to_iced())
            .with_width(self.theme.stroke.grid_width);

        for segment in segments {
            let line = Path::line(to_iced(segment.from), to_iced(segment.to));
            self.frame.stroke(&line, stroke);
        }
    }

    fn labels(&mut self, _axis: Axis, labels: &[Label], text_size: f32) {
        for label in labels {
            self.frame.fill_text(Text {
                content:  label.text.clone(),
                position: to_iced(label.position),
                color:    self.theme.label.to_iced(),
                size:     text_size.into(),
                ..Text::default()
            });
        }
    }
}

#[inline]
fn to_iced(p: plot_core::Point) -> Point {
    Point::new(p.x, p.y)
}
