//! Derived values: piecewise-linear mapping between ranges.

/// Map `input` from `input_range` onto `output_range`, clamping at both ends.
///
/// The ranges must have equal length (at least 2) and `input_range` must be
/// ascending. Mismatched or short ranges return the first output, or 0 when
/// there is none.
pub fn interpolate(input: f64, input_range: &[f64], output_range: &[f64]) -> f64 {
    if input_range.len() < 2 || input_range.len() != output_range.len() {
        return output_range.first().copied().unwrap_or(0.0);
    }

    let last = input_range.len() - 1;
    if input.is_nan() || input <= input_range[0] {
        return output_range[0];
    }
    if input >= input_range[last] {
        return output_range[last];
    }

    let segment = input_range
        .windows(2)
        .position(|w| input < w[1])
        .unwrap_or(last - 1);

    let t = progress(input_range[segment], input_range[segment + 1], input);
    mix(output_range[segment], output_range[segment + 1], t)
}

/// Linear blend between `from` and `to`.
pub fn mix(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Position of `value` between `from` and `to` as a fraction. 1 when the
/// span is empty.
pub fn progress(from: f64, to: f64, value: f64) -> f64 {
    let span = to - from;
    if span == 0.0 {
        1.0
    } else {
        (value - from) / span
    }
}
