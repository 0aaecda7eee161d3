// File: crates/align-core/src/grid.rs
// Summary: Tick placement helpers for the plot grid.

/// Smallest 1/2/5 x 10^k step giving at most `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let span = span.abs().max(1e-12);
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    mult * mag
}

/// Multiples of a nice step that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    // round away float dust like 60.00000000001
    (first..=last).map(|k| (k as f64 * step * 1e9).round() / 1e9).collect()
}
