//! Contrast lookup table.
//!
//! The contrast branch maps each 8-bit channel independently, so the whole
//! function fits in 256 entries computed once per mapper.

/// Precomputed `min(255, round(v * factor))` for every `v` in `0..=255`.
#[derive(Debug, Clone)]
pub(crate) struct ContrastLut {
    table: [u8; 256],
}

impl ContrastLut {
    pub(crate) fn new(factor: f32) -> Self {
        let mut table = [0u8; 256];
        for (v, slot) in table.iter_mut().enumerate() {
            *slot = (v as f32 * factor).round().clamp(0.0, 255.0) as u8;
        }
        Self { table }
    }

    #[inline]
    pub(crate) fn get(&self, v: u8) -> u8 {
        self.table[v as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let lut = ContrastLut::new(1.2);
        assert_eq!(lut.get(0), 0);
        assert_eq!(lut.get(255), 255);
    }

    #[test]
    fn test_rounds_to_nearest() {
        let lut = ContrastLut::new(1.2);
        assert_eq!(lut.get(10), 12);
        // 3 * 1.2 = 3.6
        assert_eq!(lut.get(3), 4);
        // 2 * 1.2 = 2.4
        assert_eq!(lut.get(2), 2);
    }

    #[test]
    fn test_clamps_at_255() {
        let lut = ContrastLut::new(1.2);
        // 213 * 1.2 = 255.6
        assert_eq!(lut.get(213), 255);
        assert_eq!(lut.get(212), 254);
    }

    #[test]
    fn test_monotonicity() {
        let lut = ContrastLut::new(1.2);
        for v in 1..=255u8 {
            assert!(lut.get(v) >= lut.get(v - 1), "not monotonic at {v}");
        }
    }

    #[test]
    fn test_identity_factor() {
        let lut = ContrastLut::new(1.0);
        for v in 0..=255u8 {
            assert_eq!(lut.get(v), v);
        }
    }
}
