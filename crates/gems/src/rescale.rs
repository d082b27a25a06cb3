use num_traits::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        assert!(min <= max, "Range::new: min must be <= max");
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

pub trait RescaleExt: Sized + Copy {
    /// Limit the value to the range. NaN stays NaN.
    fn clamp_to(self, range: &Range<Self>) -> Self;

    /// Rescale from range to [0, 1]
    fn rescale_01(self, range: &Range<Self>) -> Self;

    /// Rescale from range to [0, 1] with enforced bounds
    fn rescale_01_clamped(self, range: &Range<Self>) -> Self {
        self.clamp_to(range).rescale_01(range)
    }
}

impl<T: Float> RescaleExt for T {
    fn clamp_to(self, range: &Range<Self>) -> Self {
        if self < range.min {
            range.min
        } else if self > range.max {
            range.max
        } else {
            self
        }
    }

    fn rescale_01(self, range: &Range<Self>) -> Self {
        (self - range.min) / (range.max - range.min)
    }
}

pub type RangeF64 = Range<f64>;
