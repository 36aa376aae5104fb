/// Smallest and largest value observed in a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    pub min: f32,
    pub max: f32,
}

impl Extremes {
    /// `None` for an empty slice.
    pub fn of(values: &[f32]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let init = Self { min: *first, max: *first };
        Some(rest.iter().fold(init, |acc, &v| Self {
            min: acc.min.min(v),
            max: acc.max.max(v),
        }))
    }

    #[inline]
    pub fn is_flat(&self) -> bool {
        self.max == self.min
    }
}

/// Affine map sending `[min, max]` onto `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    from: Extremes,
    lower: f32,
    upper: f32,
}

impl AffineMap {
    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        self.lower
            + (value - self.from.min) * (self.upper - self.lower) / (self.from.max - self.from.min)
    }

    /// Screen distance covered by one unit of input.
    #[inline]
    pub fn slope(&self) -> f32 {
        (self.upper - self.lower) / (self.from.max - self.from.min)
    }

    pub fn source(&self) -> Extremes {
        self.from
    }
}

/// Conditional min-max normalizer.
///
/// Values are only remapped when the window's extremes leave
/// `[lower, upper]`; in-band windows pass through untouched, so the
/// curve's scale jumps on the tick the condition toggles.
#[derive(Debug, Clone, Copy)]
pub struct AutoScaler {
    lower: f32,
    upper: f32,
}

impl AutoScaler {
    pub fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// The map to apply for a window with `extremes`, if any.
    ///
    /// A flat window (`min == max`) is never remapped.
    pub fn transform_for(&self, extremes: Extremes) -> Option<AffineMap> {
        let violated = extremes.min < self.lower || extremes.max > self.upper;
        if !violated || extremes.is_flat() {
            return None;
        }
        Some(AffineMap {
            from: extremes,
            lower: self.lower,
            upper: self.upper,
        })
    }

    /// Rescale `values` in place, returning the map that was applied.
    pub fn apply(&self, values: &mut [f32]) -> Option<AffineMap> {
        let map = self.transform_for(Extremes::of(values)?)?;
        values.iter_mut().for_each(|v| *v = map.apply(*v));
        tracing::trace!(min = map.from.min, max = map.from.max, "window rescaled");
        Some(map)
    }
}
