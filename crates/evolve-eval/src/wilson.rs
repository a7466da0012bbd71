//! Wilson score interval for a binomial proportion.

/// Normal quantile for a two-sided 95 % interval.
pub const WILSON_Z_95: f64 = 1.96;

/// `(low, high)` bounds for `successes` out of `n` trials, clamped to `[0, 1]`.
///
/// `n == 0` yields `(0, 0)`. `successes` above `n` is treated as `n`.
pub fn wilson_interval(successes: u32, n: u32, z: f64) -> (f64, f64) {
    if n == 0 {
        return (0.0, 0.0);
    }
    let n = f64::from(n);
    let p_hat = f64::from(successes).min(n) / n;
    let z2 = z * z;

    let denom = 1.0 + z2 / n;
    let center = p_hat + z2 / (2.0 * n);
    let margin = z * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).sqrt();

    let low = ((center - margin) / denom).max(0.0);
    let high = ((center + margin) / denom).min(1.0);
    (low, high)
}
