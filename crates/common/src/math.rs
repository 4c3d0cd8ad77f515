//! Scalar helpers shared by the rig, the world and the feedback loop.

/// Below this magnitude a length or separation is treated as zero.
pub const EPSILON: f32 = 1.0e-6;

/// One step of first-order smoothing: `current + (target - current) * rate`.
///
/// `rate` is a per-frame fraction; values outside [0, 1] are clamped so the
/// result never overshoots `target`.
pub fn smooth_toward(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate.clamp(0.0, 1.0)
}

/// Frame-rate independent lerp factor for an exponential approach at `speed` per second.
pub fn exp_lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Logarithmic ease on [0, 1]: `ln(x * k + 1) / ln(k + 1)`.
///
/// Rises steeply near zero and flattens toward one. Input is clamped to [0, 1];
/// a non-positive `k` degrades to the identity.
pub fn log_ease(x: f32, k: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if k <= EPSILON {
        return x;
    }
    ((x * k + 1.0).ln() / (k + 1.0).ln()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_converges_without_overshoot() {
        let target: f32 = 3.0;
        let mut current = 2.0;
        let mut prev_gap = (target - current).abs();
        for _ in 0..200 {
            current = smooth_toward(current, target, 0.1);
            let gap = target - current;
            assert!(gap >= 0.0, "overshoot: {current}");
            assert!(gap.abs() <= prev_gap);
            prev_gap = gap.abs();
        }
        assert!((current - target).abs() < 1e-4);
    }

    #[test]
    fn smoothing_downward_is_monotone() {
        let mut current = 3.0;
        for _ in 0..100 {
            let next = smooth_toward(current, 2.0, 0.25);
            assert!(next <= current);
            assert!(next >= 2.0);
            current = next;
        }
    }

    #[test]
    fn log_ease_endpoints() {
        assert_eq!(log_ease(0.0, 20.0), 0.0);
        assert!((log_ease(1.0, 20.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn log_ease_is_monotone() {
        let mut prev = log_ease(0.0, 20.0);
        for i in 1..=1000 {
            let v = log_ease(i as f32 / 1000.0, 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn log_ease_front_loads_the_curve() {
        assert!(log_ease(0.25, 20.0) > 0.5);
    }

    #[test]
    fn log_ease_degenerate_k_is_linear() {
        assert_eq!(log_ease(0.3, 0.0), 0.3);
    }

    #[test]
    fn exp_lerp_factor_bounds() {
        assert_eq!(exp_lerp_factor(6.0, 0.0), 0.0);
        let f = exp_lerp_factor(6.0, 1.0 / 60.0);
        assert!(f > 0.0 && f < 1.0);
    }
}
