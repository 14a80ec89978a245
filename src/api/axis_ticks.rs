use crate::core::LinearScale;

pub(super) const AXIS_TARGET_SPACING_PX: f64 = 50.0;
pub(super) const AXIS_MIN_TICKS: usize = 2;
pub(super) const AXIS_MAX_TICKS: usize = 10;

/// One tick on an axis: data value plus its formatted label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Round tick values covering `[start, end]`, stepping by 1, 2 or 5 times a
/// power of ten so that roughly `count` ticks fit.
#[must_use]
pub fn nice_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }

    let (low, high, reversed) = if end < start {
        (end, start, true)
    } else {
        (start, end, false)
    };
    let Some((first, last, increment)) = tick_spec(low, high, count) else {
        return Vec::new();
    };

    let steps = (last - first) as usize;
    let mut ticks: Vec<f64> = (0..=steps)
        .map(|offset| {
            let index = first + offset as f64;
            if increment < 0.0 {
                index / -increment
            } else {
                index * increment
            }
        })
        .collect();
    if reversed {
        ticks.reverse();
    }
    ticks
}

/// Returns `(first_index, last_index, increment)`.
///
/// A negative increment means "divide by its magnitude", which keeps
/// sub-unit steps exact.
fn tick_spec(low: f64, high: f64, count: usize) -> Option<(f64, f64, f64)> {
    let step = (high - low) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (first, last, increment) = if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        let mut first = (low * inverse).round();
        let mut last = (high * inverse).round();
        if first / inverse < low {
            first += 1.0;
        }
        if last / inverse > high {
            last -= 1.0;
        }
        (first, last, -inverse)
    } else {
        let increment = 10f64.powf(power) * factor;
        let mut first = (low / increment).round();
        let mut last = (high / increment).round();
        if first * increment < low {
            first += 1.0;
        }
        if last * increment > high {
            last -= 1.0;
        }
        (first, last, increment)
    };

    if !first.is_finite() || !last.is_finite() || last < first {
        return None;
    }
    Some((first, last, increment))
}

fn decimals_for(ticks: &[f64]) -> usize {
    let step = match ticks {
        [first, second, ..] => (second - first).abs(),
        _ => return 0,
    };
    if step >= 1.0 || step == 0.0 {
        return 0;
    }
    (-step.log10()).ceil().max(0.0) as usize
}

/// Ticks for `scale` sized to the pixel span it covers.
#[must_use]
pub fn axis_ticks(scale: LinearScale) -> Vec<AxisTick> {
    let (range_start, range_end) = scale.range();
    let count = axis_tick_target_count(
        (range_end - range_start).abs(),
        AXIS_TARGET_SPACING_PX,
        AXIS_MIN_TICKS,
        AXIS_MAX_TICKS,
    );
    let (domain_start, domain_end) = scale.domain();
    let values = nice_ticks(domain_start, domain_end, count);
    let decimals = decimals_for(&values);
    values
        .into_iter()
        .map(|value| AxisTick {
            value,
            label: format!("{value:.decimals$}"),
        })
        .collect()
}
