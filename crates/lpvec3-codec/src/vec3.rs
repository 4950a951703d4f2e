use std::fmt;

use crate::scale::sanitize;

/// A three-component `f64` vector, typically a displacement or offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpVec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl LpVec3 {
    /// The zero vector. Encodes to the single byte `0x00`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// This vector with every component passed through [`sanitize`].
    pub fn sanitized(&self) -> Self {
        Self::new(sanitize(self.x), sanitize(self.y), sanitize(self.z))
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Number of bytes this vector occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        crate::codec::lp_vec3_size(self)
    }
}

impl From<[f64; 3]> for LpVec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<LpVec3> for [f64; 3] {
    fn from(v: LpVec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for LpVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ABS_MAX;

    #[test]
    fn sanitized_replaces_nan_and_clamps() {
        let v = LpVec3::new(f64::NAN, -3.0e10, f64::INFINITY).sanitized();
        assert_eq!(v, LpVec3::new(0.0, -ABS_MAX, ABS_MAX));
    }

    #[test]
    fn max_abs_picks_largest_magnitude() {
        assert_eq!(LpVec3::new(1.0, -7.5, 3.0).max_abs(), 7.5);
        assert_eq!(LpVec3::ZERO.max_abs(), 0.0);
    }

    #[test]
    fn array_conversions() {
        let v = LpVec3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, LpVec3::new(1.0, 2.0, 3.0));
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn display_formats_components() {
        assert_eq!(LpVec3::new(1.5, -2.0, 0.0).to_string(), "(1.5, -2, 0)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_named_fields() {
        let json = serde_json::to_string(&LpVec3::new(1.0, 2.5, -3.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.5,"z":-3.0}"#);
        let back: LpVec3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LpVec3::new(1.0, 2.5, -3.0));
    }
}
