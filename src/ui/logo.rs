/// Workshop logo: two W strokes sharing an A apex, drawn on a canvas
use iced::widget::canvas::{self, LineCap, LineJoin, Path, Stroke};
use iced::{Element, Point, Rectangle};

use crate::Message;

/// Stroke polylines on a 100x100 grid
const STROKES: [&[(f32, f32)]; 3] = [
    // left W, its last leg is the A's left side
    &[(5.0, 45.0), (12.0, 95.0), (20.0, 60.0), (28.0, 95.0), (50.0, 5.0)],
    // right W, its first leg is the A's right side
    &[(50.0, 5.0), (72.0, 95.0), (80.0, 60.0), (88.0, 95.0), (95.0, 45.0)],
    // A crossbar
    &[(30.0, 32.0), (70.0, 32.0)],
];

const STROKE_WIDTH: f32 = 6.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Logo;

impl canvas::Program<Message> for Logo {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let scale = bounds.width.min(bounds.height) / 100.0;
        let color = theme.palette().text;

        for points in STROKES {
            let path = Path::new(|builder| {
                let mut points = points.iter().map(|&(x, y)| Point::new(x * scale, y * scale));
                if let Some(start) = points.next() {
                    builder.move_to(start);
                }
                for point in points {
                    builder.line_to(point);
                }
            });

            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(color)
                    .with_width(STROKE_WIDTH * scale)
                    .with_line_cap(LineCap::Round)
                    .with_line_join(LineJoin::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

pub fn logo<'a>(size: f32) -> Element<'a, Message> {
    iced::widget::canvas(Logo).width(size).height(size).into()
}
