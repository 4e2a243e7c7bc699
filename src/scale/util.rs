use num_traits::{Float, ToPrimitive};

/// Multipliers `K` of the "nice" numbers `K * 10^p`.
pub const NICE_MULTIPLIERS: [f64; 7] = [1.0, 1.25, 1.5, 2.0, 2.5, 5.0, 7.5];

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Tolerance used when comparing nice-number candidates against a target.
/// Returns a small fraction of `magnitude`.
pub fn epsilon_from<T: Float>(magnitude: T) -> T {
    let scale = T::from(1e-9).unwrap_or_else(T::epsilon);
    magnitude.abs() * scale
}

/// `k * 10^p`, dividing for negative `p` so decimal fractions round once.
pub fn scaled(k: f64, p: i32) -> f64 {
    if p >= 0 {
        k * 10f64.powi(p)
    } else {
        k / 10f64.powi(-p)
    }
}

/// `base^n`, dividing for negative `n`.
pub fn int_pow(base: f64, n: i32) -> f64 {
    if n >= 0 {
        base.powi(n)
    } else {
        1.0 / base.powi(-n)
    }
}

/// Largest `n` with `base^n <= value`. `None` for non-positive or non-finite input.
pub fn floor_log(value: f64, base: f64) -> Option<i32> {
    if !(value > 0.0) || !value.is_finite() {
        return None;
    }
    let mut n = (value.ln() / base.ln()).floor().to_i32()?;
    // ln rounding can land one step off at exact powers
    while int_pow(base, n) > value {
        n -= 1;
    }
    while int_pow(base, n + 1) <= value {
        n += 1;
    }
    Some(n)
}

/// Smallest `n` with `base^n >= value`. `None` for non-positive or non-finite input.
pub fn ceil_log(value: f64, base: f64) -> Option<i32> {
    if !(value > 0.0) || !value.is_finite() {
        return None;
    }
    let mut n = (value.ln() / base.ln()).ceil().to_i32()?;
    while int_pow(base, n) < value {
        n += 1;
    }
    while int_pow(base, n - 1) >= value {
        n -= 1;
    }
    Some(n)
}

/// A nice division `N` steps of `K * 10^p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiceStep {
    pub k: f64,
    pub n: u32,
    pub p: i32,
}

impl NiceStep {
    /// The interval `K * 10^p`.
    pub fn interval(&self) -> f64 {
        scaled(self.k, self.p)
    }

    /// The covered extent `N * K * 10^p`.
    pub fn extent(&self) -> f64 {
        scaled(f64::from(self.n) * self.k, self.p)
    }
}

/// Smallest `N * K * 10^p >= target` for a fixed exponent, `N` in `1..=max_n`.
///
/// Equal extents prefer the larger `N`.
fn cover_at(target: f64, p: i32, max_n: u32) -> Option<NiceStep> {
    let tol = epsilon_from(target);
    let mut best: Option<NiceStep> = None;
    for k in NICE_MULTIPLIERS {
        for n in 1..=max_n {
            let step = NiceStep { k, n, p };
            let extent = step.extent();
            if extent < target - tol {
                continue;
            }
            best = match best {
                None => Some(step),
                Some(b) if extent < b.extent() - tol => Some(step),
                Some(b) if (extent - b.extent()).abs() <= tol && n > b.n => Some(step),
                keep => keep,
            };
        }
    }
    best
}

/// Nice division covering `target` with at most `max_n` steps.
///
/// The search runs at `p = floor(log10(target))`; the exponent below is
/// preferred only if it yields strictly more steps, or the same number of
/// steps with a tighter fit.
pub fn nice_cover(target: f64, max_n: u32) -> Option<NiceStep> {
    let p = floor_log(target, 10.0)?;
    let best = cover_at(target, p, max_n).or_else(|| cover_at(target, p + 1, max_n))?;
    let Some(alt) = cover_at(target, p - 1, max_n) else {
        return Some(best);
    };
    let tol = epsilon_from(target);
    if alt.n > best.n || (alt.n == best.n && alt.extent() < best.extent() - tol) {
        Some(alt)
    } else {
        Some(best)
    }
}

/// Largest nice number `K * 10^p <= value`, for positive `value`.
pub fn nice_at_or_below(value: f64) -> Option<f64> {
    let p = floor_log(value, 10.0)?;
    let tol = epsilon_from(value);
    NICE_MULTIPLIERS
        .iter()
        .map(|&k| scaled(k, p))
        .filter(|&v| v <= value + tol)
        .last()
}

/// Smallest nice number `K * 10^p >= value`, for positive `value`.
pub fn nice_at_or_above(value: f64) -> Option<f64> {
    let p = floor_log(value, 10.0)?;
    let tol = epsilon_from(value);
    let found = NICE_MULTIPLIERS
        .iter()
        .map(|&k| scaled(k, p))
        .find(|&v| v >= value - tol);
    Some(found.unwrap_or_else(|| scaled(1.0, p + 1)))
}
