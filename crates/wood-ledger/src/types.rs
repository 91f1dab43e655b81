use serde::{Deserialize, Serialize};

use crate::pricing::price;

/// One of the three user-entered measurements of a sale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Density,
    Length,
    Width,
}

impl Field {
    /// Entry order used by every form.
    pub const ALL: [Field; 3] = [Field::Density, Field::Length, Field::Width];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Density => "density",
            Field::Length => "length",
            Field::Width => "width",
        }
    }

    /// Label shown next to the entry box.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Density => "Wood Density (kg/m^3):",
            Field::Length => "Length (m):",
            Field::Width => "Width (m):",
        }
    }

    pub fn parse(s: &str) -> Option<Field> {
        match s.trim().to_ascii_lowercase().as_str() {
            "density" => Some(Field::Density),
            "length" => Some(Field::Length),
            "width" => Some(Field::Width),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw measurements of a board, without the derived price.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// kg/m^3
    pub density: f64,
    /// m
    pub length: f64,
    /// m
    pub width: f64,
}

impl Dimensions {
    pub fn new(density: f64, length: f64, width: f64) -> Self {
        Self {
            density,
            length,
            width,
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Density => self.density,
            Field::Length => self.length,
            Field::Width => self.width,
        }
    }

    /// Price these dimensions would fetch today.
    pub fn quote(&self) -> f64 {
        price(self.density, self.length, self.width)
    }
}

/// A single recorded sale.
///
/// `price` is fixed when the record is created. Editing the dimensions later
/// leaves it as it was.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub density: f64,
    pub length: f64,
    pub width: f64,
    pub price: f64,
}

impl OrderRecord {
    /// Build a record and price it from its dimensions.
    pub fn priced(dims: Dimensions) -> Self {
        Self {
            density: dims.density,
            length: dims.length,
            width: dims.width,
            price: dims.quote(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.density, self.length, self.width)
    }

    /// `true` when the stored price still matches the current dimensions.
    pub fn price_is_current(&self) -> bool {
        let expected = self.dimensions().quote();
        (expected - self.price).abs() <= 1e-9 * expected.abs().max(1.0)
    }
}

impl std::fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Density: {}, Length: {}, Width: {}, Price: ${}",
            fmt_dimension(self.density),
            fmt_dimension(self.length),
            fmt_dimension(self.width),
            fmt_money(self.price)
        )
    }
}

/// Render a measurement as the shortest round-trip decimal, keeping a
/// trailing `.0` on integral values (`600.0`, `1.5`).
pub fn fmt_dimension(v: f64) -> String {
    format!("{v:?}")
}

/// Two-decimal money rendering, without the currency sign.
pub fn fmt_money(v: f64) -> String {
    format!("{v:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_renders_like_the_order_list() {
        let r = OrderRecord::priced(Dimensions::new(600.0, 2.0, 1.5));
        assert_eq!(
            r.to_string(),
            "Density: 600.0, Length: 2.0, Width: 1.5, Price: $18000.00"
        );
    }

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(fmt_money(12.345_6), "12.35");
        assert_eq!(fmt_money(0.0), "0.00");
    }

    #[test]
    fn field_labels_and_parse() {
        assert_eq!(Field::Density.label(), "Wood Density (kg/m^3):");
        assert_eq!(Field::parse(" Width "), Some(Field::Width));
        assert_eq!(Field::parse("height"), None);
    }

    #[test]
    fn stale_price_is_detected() {
        let mut r = OrderRecord::priced(Dimensions::new(500.0, 1.0, 1.0));
        assert!(r.price_is_current());
        r.length = 2.0;
        assert!(!r.price_is_current());
    }
}
