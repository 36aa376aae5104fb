/// Stroke widths used when drawing a plot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub curve_width: f32,
    pub grid_width:  f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            curve_width: 2.0,
            grid_width:  1.0,
        }
    }
}
