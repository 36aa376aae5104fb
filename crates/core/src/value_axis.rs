use crate::error::{PlotError, Result};
use crate::frame::GridLine;
use crate::geometry::PlotBounds;
use crate::scale::{AffineMap, Extremes};

/// Closest two value gridlines may sit on screen. Denser lattices are
/// thinned to a multiple of `bar_space`.
pub const MIN_LINE_SPACING: f32 = 2.0;

/// Horizontal gridlines spaced `bar_space` apart around the midline.
///
/// Labels carry the signal magnitude at the line's unscaled position. When
/// the window was rescaled the lines follow the same affine map so they stay
/// aligned with the curve.
#[derive(Debug, Clone, Copy)]
pub struct ValueAxisController {
    bar_space:    f32,
    scale_factor: f32,
}

impl ValueAxisController {
    pub fn new(bar_space: f32, scale_factor: f32) -> Result<Self> {
        if !(bar_space.is_finite() && bar_space > 0.0) {
            return Err(PlotError::InvalidSetting {
                name:   "bar_space",
                reason: format!("must be a positive distance (got {bar_space})"),
            });
        }
        if !scale_factor.is_finite() || scale_factor == 0.0 {
            return Err(PlotError::InvalidSetting {
                name:   "scale_factor",
                reason: format!("must be finite and non-zero (got {scale_factor})"),
            });
        }
        Ok(Self { bar_space, scale_factor })
    }

    pub fn bar_space(&self) -> f32 {
        self.bar_space
    }

    /// Gridlines for a window whose pre-rescale extremes are `extremes`.
    ///
    /// `rescale` is the map the auto-scaler applied this tick, if any.
    pub fn grid_lines(
        &self,
        bounds: &PlotBounds,
        extremes: Extremes,
        rescale: Option<&AffineMap>,
    ) -> Vec<GridLine> {
        let mid = bounds.mid_y();
        let Some(space) = self.effective_spacing(rescale) else {
            return Vec::new();
        };

        // Without a rescale anything past the bounds is suppressed anyway.
        let upward_limit = match rescale {
            Some(_) if extremes.min < bounds.top() => {
                mid - ((mid - extremes.min) / space).round() * space
            }
            _ => bounds.top(),
        };
        let downward_limit = match rescale {
            Some(_) if extremes.max > bounds.bottom() => {
                mid + ((extremes.max - mid) / space).round() * space
            }
            _ => bounds.bottom(),
        };

        // Mapped lines are at least MIN_LINE_SPACING apart, so this only
        // guards against float drift at huge magnitudes.
        let max_steps = (bounds.height() / MIN_LINE_SPACING).ceil() as u32 + 2;
        let upward = (0u32..max_steps)
            .map(|k| mid - k as f32 * space)
            .take_while(|y| *y >= upward_limit);
        let downward = (1u32..max_steps)
            .map(|k| mid + k as f32 * space)
            .take_while(|y| *y <= downward_limit);

        upward
            .chain(downward)
            .filter_map(|y| {
                let magnitude = ((mid - y) / self.scale_factor) as i64;
                let position = rescale.map_or(y, |map| map.apply(y));
                (position > bounds.top() && position < bounds.bottom()).then(|| GridLine {
                    position,
                    label: magnitude.to_string(),
                })
            })
            .collect()
    }

    /// Raw distance between walked lines: `bar_space` widened by a whole
    /// factor until neighbours land at least [`MIN_LINE_SPACING`] apart
    /// after `rescale`. `None` when the map collapses the lattice.
    fn effective_spacing(&self, rescale: Option<&AffineMap>) -> Option<f32> {
        let on_screen = rescale.map_or(self.bar_space, |map| self.bar_space * map.slope().abs());
        if !(on_screen.is_finite() && on_screen > 0.0) {
            return None;
        }
        let factor = (MIN_LINE_SPACING / on_screen).ceil().max(1.0);
        let space = self.bar_space * factor;
        space.is_finite().then_some(space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::AutoScaler;

    fn bounds() -> PlotBounds {
        PlotBounds::from_edges(0.0, 0.0, 200.0, 100.0).unwrap()
    }

    fn positions(lines: &[GridLine]) -> Vec<f32> {
        lines.iter().map(|l| l.position).collect()
    }

    #[test]
    fn rejects_bad_spacing_and_scale() {
        assert!(ValueAxisController::new(0.0, 1.0).is_err());
        assert!(ValueAxisController::new(-5.0, 1.0).is_err());
        assert!(ValueAxisController::new(10.0, 0.0).is_err());
        assert!(ValueAxisController::new(10.0, f32::INFINITY).is_err());
    }

    #[test]
    fn in_band_lines_stop_inside_bounds() {
        let axis = ValueAxisController::new(20.0, 1.0).unwrap();
        let lines = axis.grid_lines(&bounds(), Extremes { min: 40.0, max: 60.0 }, None);
        // 50, 30, 10 going up; 70, 90 going down; 110/-10 are outside
        assert_eq!(positions(&lines), vec![50.0, 30.0, 10.0, 70.0, 90.0]);
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "20", "40", "-20", "-40"]);
    }

    #[test]
    fn lines_on_the_bounds_are_suppressed() {
        let axis = ValueAxisController::new(25.0, 1.0).unwrap();
        let lines = axis.grid_lines(&bounds(), Extremes { min: 50.0, max: 50.0 }, None);
        // 0 and 100 sit exactly on the edges
        assert_eq!(positions(&lines), vec![50.0, 25.0, 75.0]);
    }

    #[test]
    fn labels_divide_by_scale_and_truncate() {
        let axis = ValueAxisController::new(20.0, 3.0).unwrap();
        let lines = axis.grid_lines(&bounds(), Extremes { min: 50.0, max: 50.0 }, None);
        // (50 - 30) / 3 = 6.67 -> 6, (50 - 70) / 3 = -6.67 -> -6
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "6", "13", "-6", "-13"]);
    }

    #[test]
    fn rescaled_lines_follow_the_curve() {
        let b = bounds();
        let scaler = AutoScaler::new(b.top(), b.bottom());
        let extremes = Extremes { min: -50.0, max: 150.0 };
        let map = scaler.transform_for(extremes).unwrap();

        let axis = ValueAxisController::new(50.0, 1.0).unwrap();
        let lines = axis.grid_lines(&b, extremes, Some(&map));

        // raw 50, 0, -50, 100, 150 -> mapped 50, 25, 0, 75, 100; edges dropped
        assert_eq!(positions(&lines), vec![50.0, 25.0, 75.0]);
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "50", "-50"]);
    }

    #[test]
    fn rescaled_extent_rounds_to_nearest_line() {
        let b = bounds();
        let extremes = Extremes { min: -36.0, max: 60.0 };
        let map = AutoScaler::new(b.top(), b.bottom()).transform_for(extremes).unwrap();
        let axis = ValueAxisController::new(20.0, 1.0).unwrap();
        let lines = axis.grid_lines(&b, extremes, Some(&map));
        // upward to 50 - round(86 / 20) * 20 = -30; the downward lines at
        // 70 and 90 map below the bottom edge
        let labels: Vec<String> = lines.iter().map(|l| l.label.clone()).collect();
        assert_eq!(labels, vec!["0", "20", "40", "60", "80"]);
        assert!(positions(&lines).iter().all(|y| *y > 0.0 && *y < 100.0));
    }

    #[test]
    fn huge_spike_keeps_line_count_bounded() {
        let b = bounds();
        let axis = ValueAxisController::new(10.0, 1.0).unwrap();
        for spike in [1e4_f32, 1e7, 1e9, 3e10] {
            let extremes = Extremes { min: 50.0 - spike, max: 50.0 };
            let map = AutoScaler::new(b.top(), b.bottom()).transform_for(extremes).unwrap();
            let lines = axis.grid_lines(&b, extremes, Some(&map));

            assert!(!lines.is_empty(), "spike {spike}");
            assert!(lines.len() <= 52, "spike {spike}: {} lines", lines.len());
            let mut ys = positions(&lines);
            ys.sort_by(f32::total_cmp);
            assert!(ys.windows(2).all(|w| w[1] - w[0] >= MIN_LINE_SPACING - 1e-3));
        }
    }

    #[test]
    fn dense_unscaled_lattice_is_thinned() {
        let axis = ValueAxisController::new(0.5, 1.0).unwrap();
        let lines = axis.grid_lines(&bounds(), Extremes { min: 50.0, max: 50.0 }, None);
        // every fourth half-pixel line: 50, 48, ..., 2 and 52, ..., 98
        assert_eq!(lines.len(), 49);
        assert_eq!(lines[1].position, 48.0);
    }
}
