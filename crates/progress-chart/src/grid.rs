// File: crates/progress-chart/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Pick at most `max_ticks` indices spread evenly over `0..len`.
///
/// Always yields at least one index for a non-empty range. With two or more
/// ticks the first and last index are included. Indices are strictly increasing.
pub fn even_ticks(len: usize, max_ticks: usize) -> Vec<usize> {
    if len == 0 { return Vec::new(); }
    let count = len.min(max_ticks.max(1));
    if count == 1 { return vec![0]; }
    let last = (len - 1) as f64;
    (0..count)
        .map(|i| (last * i as f64 / (count - 1) as f64).round() as usize)
        .collect()
}

/// Format a tick value with just enough precision for the axis span.
pub fn format_tick(value: f64, span: f64) -> String {
    if span.abs() >= 10.0 {
        format!("{:.0}", value)
    } else if span.abs() >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn even_ticks_short_series_ticks_everything() {
        assert_eq!(even_ticks(1, 10), vec![0]);
        assert_eq!(even_ticks(4, 10), vec![0, 1, 2, 3]);
    }

    #[test]
    fn even_ticks_long_series_is_capped() {
        for len in [11usize, 37, 365, 1000] {
            let ticks = even_ticks(len, 10);
            assert_eq!(ticks.len(), 10, "len {len}");
            assert_eq!(ticks[0], 0);
            assert_eq!(*ticks.last().unwrap(), len - 1);
            assert!(ticks.windows(2).all(|w| w[0] < w[1]), "len {len}: {ticks:?}");
        }
    }

    #[test]
    fn even_ticks_never_zero_for_data() {
        assert_eq!(even_ticks(5, 0), vec![0]);
        assert!(even_ticks(0, 10).is_empty());
    }

    #[test]
    fn tick_precision_follows_span() {
        assert_eq!(format_tick(120.0, 300.0), "120");
        assert_eq!(format_tick(2.26, 4.0), "2.3");
        assert_eq!(format_tick(0.126, 0.5), "0.13");
    }
}
