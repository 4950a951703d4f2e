//! Fixed-point mapping between a normalized axis value and its 15-bit code.

/// Mask of one axis code.
pub const DATA_BITS_MASK: u64 = 0x7FFF;

/// Largest code the encoder produces for a value in `[-1, 1]`.
pub const MAX_QUANTIZED: u64 = 32766;

const MAX_QUANTIZED_F64: f64 = MAX_QUANTIZED as f64;

/// Map a normalized value to its code: -1 → 0, 0 → 16383, 1 → 32766.
///
/// No clamp is applied. A value outside `[-1, 1]` yields a code outside the
/// 15-bit range, and the frame codec shifts it into place unmasked.
pub fn quantize(normalized: f64) -> i64 {
    ((normalized * 0.5 + 0.5) * MAX_QUANTIZED_F64).round() as i64
}

/// Map the low 15 bits of `raw` back to `[-1, 1]`.
///
/// Bits above the field are ignored; the unused code 32767 decodes as 1.
pub fn dequantize(raw: u64) -> f64 {
    let clamped = (raw & DATA_BITS_MASK).min(MAX_QUANTIZED);
    (clamped as f64 * 2.0) / MAX_QUANTIZED_F64 - 1.0
}
