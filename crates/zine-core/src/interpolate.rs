//! Clamped piecewise-linear interpolation, the only animation primitive the
//! scroll model needs.

/// Map `value` from `input` onto `output`, clamping to the output endpoints
/// outside the input range.
///
/// A zero-width input range behaves as a step at `input.0`. Non-finite input
/// maps to `output.0`.
pub fn interpolate(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    if !value.is_finite() {
        return output.0;
    }
    let (in0, in1) = input;
    let span = in1 - in0;
    if span.abs() <= f32::EPSILON {
        return if value >= in0 { output.1 } else { output.0 };
    }
    let t = ((value - in0) / span).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}

/// Smoothstep easing on `t` clamped to [0, 1].
pub fn smoothstep(t: f32) -> f32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    t * t * (3.0 - 2.0 * t)
}
