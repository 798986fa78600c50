// Mon Oct 19 2026 - Alex

pub struct MathUtils;

impl MathUtils {
    /// Rounds half away from zero to `decimals` fractional digits.
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        // -0.0 prints as "-0"
        Self::normalize_zero((value * factor).round() / factor)
    }

    pub fn round2(value: f64) -> f64 {
        Self::round_to(value, 2)
    }

    /// Smallest value with at most `decimals` digits that is >= `value`.
    pub fn ceil_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        let scaled = value * factor;
        if !scaled.is_finite() {
            return value;
        }
        let nearest = scaled.round();
        // absorb representation error such as 0.57 * 100 = 56.999...
        let snapped = if Self::near_integer(scaled, nearest) { nearest } else { scaled.ceil() };
        Self::normalize_zero(snapped / factor)
    }

    /// Largest value with at most `decimals` digits that is <= `value`.
    pub fn floor_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        let scaled = value * factor;
        if !scaled.is_finite() {
            return value;
        }
        let nearest = scaled.round();
        let snapped = if Self::near_integer(scaled, nearest) { nearest } else { scaled.floor() };
        Self::normalize_zero(snapped / factor)
    }

    fn near_integer(scaled: f64, nearest: f64) -> bool {
        (scaled - nearest).abs() <= 1e-9 * scaled.abs().max(1.0)
    }

    fn normalize_zero(value: f64) -> f64 {
        if value == 0.0 {
            0.0
        } else {
            value
        }
    }

    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    pub fn has_at_most_decimals(value: f64, decimals: u32) -> bool {
        let factor = 10f64.powi(decimals as i32);
        let scaled = value * factor;
        (scaled - scaled.round()).abs() < 1e-6
    }

    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// SplitMix64 finalizer, used to spread a base seed over worker indices.
    pub fn mix_seed(seed: u64, index: u64) -> u64 {
        let mut z = seed.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}
