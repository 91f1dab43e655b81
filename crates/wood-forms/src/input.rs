//! Text-to-number conversion shared by both dialogs.

use wood_ledger::{Dimensions, Field};

use crate::error::FormError;

/// Parse one entry box.
///
/// Surrounding whitespace is ignored, but whitespace-only text is not a
/// number. The value must be finite and strictly positive.
pub fn parse_number(field: Field, text: &str) -> Result<f64, FormError> {
    let invalid = || FormError::InvalidNumber {
        field,
        text: text.to_string(),
    };
    let v: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !v.is_finite() || v <= 0.0 {
        return Err(invalid());
    }
    Ok(v)
}

/// Validate all three inputs.
///
/// Emptiness is checked across every field before any parsing, so a form
/// with one blank and one garbage field reports the blank.
pub fn parse_dimensions(density: &str, length: &str, width: &str) -> Result<Dimensions, FormError> {
    let texts = [density, length, width];

    let missing: Vec<Field> = Field::ALL
        .iter()
        .zip(texts.iter())
        .filter(|(_, t)| t.is_empty())
        .map(|(f, _)| *f)
        .collect();
    if !missing.is_empty() {
        return Err(FormError::MissingField { fields: missing });
    }

    Ok(Dimensions::new(
        parse_number(Field::Density, density)?,
        parse_number(Field::Length, length)?,
        parse_number(Field::Width, width)?,
    ))
}
