use crate::{Drawable, Painter, Pen, Rgb};
use gems::{RangeF64, Rect2, RescaleExt};

/// Maximum quantity a tank can hold
pub const TANK_CAPACITY: f64 = 100.0;

/// Default tank extent in scene units
pub const TANK_SIZE: (f64, f64) = (100., 150.);

const FLUID_COLOR: Rgb = Rgb(0, 120, 255);
const OUTLINE_WIDTH: f64 = 3.;
const FLUID_MARGIN: f64 = 2.;

/// A bounded reservoir. Quantity always stays within [0, capacity].
#[derive(Clone, Debug)]
pub struct Tank {
    label: String,
    bounds: Rect2,
    quantity: f64,
}

impl Tank {
    /// Empty tank with its top-left corner at (x, y)
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            bounds: Rect2::new(x, y, TANK_SIZE.0, TANK_SIZE.1),
            quantity: 0.,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn bounds(&self) -> &Rect2 {
        &self.bounds
    }

    pub fn capacity(&self) -> f64 {
        TANK_CAPACITY
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Remaining room until the tank is full
    pub fn free_capacity(&self) -> f64 {
        TANK_CAPACITY - self.quantity
    }

    pub fn is_empty(&self) -> bool {
        self.quantity <= 0.
    }

    pub fn is_full(&self) -> bool {
        self.quantity >= TANK_CAPACITY
    }

    /// Fill level in [0, 1]
    pub fn fill_fraction(&self) -> f64 {
        self.quantity.rescale_01(&Self::limits())
    }

    /// Fill level as shown to the user, truncated towards zero
    pub fn percent(&self) -> i32 {
        (self.quantity * 100. / TANK_CAPACITY) as i32
    }

    /// Adds up to `amount` and returns how much actually went in
    pub fn add(&mut self, amount: f64) -> f64 {
        let delta = amount.min(self.free_capacity());
        // rounding of the free capacity must not push the quantity past the limit
        self.quantity = (self.quantity + delta).min(TANK_CAPACITY);
        delta
    }

    /// Removes up to `amount` and returns how much actually came out
    pub fn remove(&mut self, amount: f64) -> f64 {
        let delta = amount.min(self.quantity);
        self.quantity -= delta;
        delta
    }

    /// Overwrites the quantity. The value is limited to [0, capacity].
    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity.clamp_to(&Self::limits());
    }

    pub fn empty(&mut self) {
        self.quantity = 0.;
    }

    fn limits() -> RangeF64 {
        RangeF64::new(0., TANK_CAPACITY)
    }
}

impl Drawable for Tank {
    fn draw(&self, painter: &mut dyn Painter) {
        let fill = self.fill_fraction();
        if fill > 0. {
            let inner = self.bounds.inset(FLUID_MARGIN);
            let height = inner.height * fill;
            let column = Rect2::new(
                inner.min.x,
                inner.min.y + inner.height - height,
                inner.width,
                height,
            );
            painter.rect(&column, None, Some(FLUID_COLOR));
        }

        painter.rect(&self.bounds, Some(Pen::new(Rgb::BLACK, OUTLINE_WIDTH)), None);

        let percent = format!("{}%", self.percent());
        painter.text(&self.bounds, &[self.label.as_str(), percent.as_str()], Rgb::BLACK);
    }
}
