//! Input sanitizing and per-vector scale selection.
//!
//! Every component of a vector is divided by one shared integer scale before
//! quantization, so a single (usually inline) field governs the precision of
//! all three axes.

use crate::vec3::LpVec3;

/// Largest component magnitude the encoder accepts; larger values are clamped.
///
/// `ceil(ABS_MAX) >> 2` is `u32::MAX`, so the scale extension always fits the
/// varint domain.
pub const ABS_MAX: f64 = 1.7179869183e10;

/// Vectors whose largest component is below this encode as the zero form.
pub const ABS_MIN: f64 = 3.051944088384301e-5;

/// Number of scale bits stored inline in the first byte.
pub const SCALE_BITS: u32 = 2;

/// Mask of the inline scale bits.
pub const SCALE_BITS_MASK: u64 = 0b11;

/// Set in the first byte when a varint scale extension follows the frame.
pub const CONTINUATION_FLAG: u64 = 0b100;

/// Replace NaN with zero and clamp into `[-ABS_MAX, ABS_MAX]`.
pub fn sanitize(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-ABS_MAX, ABS_MAX)
}

/// The shared normalization divisor of a non-zero vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale(u64);

impl Scale {
    /// Wrap a raw scale value. Values above `ceil(ABS_MAX)` are never produced
    /// by [`select_scale`].
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The scale as an integer.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The scale as a divisor/multiplier.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// True when the scale does not fit the inline 2-bit field.
    pub const fn needs_continuation(self) -> bool {
        self.0 & SCALE_BITS_MASK != self.0
    }

    /// Low bits of the first byte: inline scale bits plus the continuation flag.
    pub const fn control_bits(self) -> u64 {
        if self.needs_continuation() {
            (self.0 & SCALE_BITS_MASK) | CONTINUATION_FLAG
        } else {
            self.0
        }
    }

    /// Value carried by the trailing varint, if any.
    pub fn extension(self) -> Option<u32> {
        // scale <= ceil(ABS_MAX) = 2^34 - 1, so the shifted value fits u32.
        self.needs_continuation()
            .then(|| (self.0 >> SCALE_BITS) as u32)
    }

    /// Rebuild a scale from its inline bits and optional extension.
    pub fn from_parts(control: u8, extension: Option<u32>) -> Self {
        let inline = u64::from(control) & SCALE_BITS_MASK;
        match extension {
            Some(ext) => Self(inline | (u64::from(ext) << SCALE_BITS)),
            None => Self(inline),
        }
    }
}

/// Choose the scale for an already-sanitized vector.
///
/// Returns `None` when the vector takes the 1-byte zero form.
pub fn select_scale(sanitized: &LpVec3) -> Option<Scale> {
    let max = sanitized.max_abs();
    if max < ABS_MIN {
        return None;
    }
    Some(Scale(max.ceil() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_nan_is_zero() {
        assert_eq!(sanitize(f64::NAN), 0.0);
    }

    #[test]
    fn sanitize_clamps_magnitude() {
        assert_eq!(sanitize(2e10), ABS_MAX);
        assert_eq!(sanitize(-2e10), -ABS_MAX);
        assert_eq!(sanitize(f64::NEG_INFINITY), -ABS_MAX);
        assert_eq!(sanitize(12.5), 12.5);
    }

    #[test]
    fn below_abs_min_is_zero_form() {
        assert_eq!(select_scale(&LpVec3::ZERO), None);
        assert_eq!(select_scale(&LpVec3::new(3.0e-5, -3.0e-5, 0.0)), None);
    }

    #[test]
    fn at_abs_min_scale_is_one() {
        let scale = select_scale(&LpVec3::new(ABS_MIN, 0.0, 0.0)).unwrap();
        assert_eq!(scale.get(), 1);
        assert!(!scale.needs_continuation());
    }

    #[test]
    fn scale_is_ceiling_of_max_abs() {
        let scale = select_scale(&LpVec3::new(0.5, -2.25, 1.0)).unwrap();
        assert_eq!(scale.get(), 3);
        assert_eq!(scale.control_bits(), 0b11);
        assert_eq!(scale.extension(), None);
    }

    #[test]
    fn scale_above_three_needs_continuation() {
        let scale = select_scale(&LpVec3::new(4.0, 0.0, 0.0)).unwrap();
        assert_eq!(scale.get(), 4);
        assert!(scale.needs_continuation());
        assert_eq!(scale.control_bits(), 0b100);
        assert_eq!(scale.extension(), Some(1));
    }

    #[test]
    fn max_scale_extension_fits_u32() {
        let scale = select_scale(&LpVec3::new(0.0, 0.0, -ABS_MAX)).unwrap();
        assert_eq!(scale.get(), 17_179_869_183);
        assert_eq!(scale.extension(), Some(u32::MAX));
        assert_eq!(scale.control_bits(), 0b111);
    }

    #[test]
    fn from_parts_reverses_split() {
        for value in [1u64, 2, 3, 4, 7, 100, 17_179_869_183] {
            let scale = Scale::new(value);
            let rebuilt = Scale::from_parts(scale.control_bits() as u8, scale.extension());
            assert_eq!(rebuilt, scale);
        }
    }
}
