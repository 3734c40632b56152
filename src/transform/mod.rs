// SPDX-FileCopyrightText: The knobio authors
// SPDX-License-Identifier: MPL-2.0

//! Sensitivity/step model and domain conversions for control values.
//!
//! A [`ValueTransform`] turns decoded encoder deltas into changes of an
//! internal integer parameter value in `[0, upper_bound)` and converts that
//! value into the display and normalized domains consumed by visual
//! feedback and external protocols.

use crate::{ControlByte, Encoding};

mod registry;
pub use self::registry::{RegistryError, TransformRegistry};


/// Lower bound of the user-facing sensitivity domain.
pub const SENSITIVITY_MIN: f64 = -100.0;

/// Upper bound of the user-facing sensitivity domain.
pub const SENSITIVITY_MAX: f64 = 100.0;

/// Neutral sensitivity, i.e. a tick multiplier of 1.
pub const DEFAULT_SENSITIVITY: f64 = 0.0;

/// Default distance one encoder tick represents.
pub const DEFAULT_STEP_SIZE: i32 = 1;

/// Maps the user-facing sensitivity domain `[-100, 100]` onto a tick
/// multiplier in `[0.1, 10]`.
///
/// The mapping is non-linear: the negative half compresses towards
/// near-zero speed, the positive half expands up to 10x.
#[must_use]
pub fn sensitivity_factor(sensitivity: f64) -> f64 {
    if sensitivity < 0.0 {
        ((100.0 + sensitivity) / 100.0).max(0.1)
    } else {
        1.0 + sensitivity / 100.0 * 9.0
    }
}

/// Converts between wire samples of one encoding scheme and an internal
/// integer parameter domain.
///
/// One instance is constructed per control surface (or shared per encoding
/// tag in a [`TransformRegistry`]). All fields are plain mutable scalars;
/// instances are meant to be read and written exclusively from the single
/// control-event-dispatch thread of the hosting application.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTransform {
    encoding: Encoding,
    /// Exclusive ceiling of the internal value domain.
    upper_bound: i32,
    step_size: i32,
    sensitivity: f64,
}

impl ValueTransform {
    #[must_use]
    pub const fn new(encoding: Encoding, upper_bound: i32, step_size: i32) -> Self {
        Self {
            encoding,
            upper_bound,
            step_size,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[must_use]
    pub const fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    #[must_use]
    pub const fn step_size(&self) -> i32 {
        self.step_size
    }

    #[must_use]
    pub const fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn set_upper_bound(&mut self, upper_bound: i32) {
        self.upper_bound = upper_bound;
    }

    pub fn set_step_size(&mut self, step_size: i32) {
        self.step_size = step_size;
    }

    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.sensitivity = sensitivity;
    }

    /// Width of the internal value domain as used by the domain
    /// conversions. Guarded so that `upper_bound == 1` stays total.
    const fn span(&self) -> i32 {
        if self.upper_bound > 1 {
            self.upper_bound - 1
        } else {
            1
        }
    }

    /// See [`Encoding::decode`].
    #[must_use]
    pub const fn decode(&self, control: ControlByte) -> i32 {
        self.encoding.decode(control)
    }

    /// See [`Encoding::encode`].
    #[must_use]
    pub const fn encode(&self, delta: i32) -> ControlByte {
        self.encoding.encode(delta)
    }

    /// The value change one wire sample produces at the given sensitivity.
    #[must_use]
    pub fn knob_change(&self, control: ControlByte, sensitivity: f64) -> f64 {
        f64::from(self.decode(control)) * f64::from(self.step_size) * sensitivity_factor(sensitivity)
    }

    /// The minimal integer value change of one wire sample.
    ///
    /// Evaluates the knob change at minimum sensitivity, rounded away from
    /// zero with a minimum magnitude of 1. Returns 0 only for a sample that
    /// decodes to a zero delta.
    #[must_use]
    pub fn stepped_knob_change(&self, control: ControlByte) -> i64 {
        let change = self.knob_change(control, SENSITIVITY_MIN);
        if change > 0.0 {
            change.ceil().max(1.0) as i64
        } else if change < 0.0 {
            change.floor().min(-1.0) as i64
        } else {
            0
        }
    }

    /// Whether the sample turns the bound parameter up at the instance's
    /// current sensitivity.
    #[must_use]
    pub fn is_increase(&self, control: ControlByte) -> bool {
        self.knob_change(control, self.sensitivity) > 0.0
    }

    /// Applies one wire sample to a parameter value in `[0, max_param)`.
    #[must_use]
    pub fn change_value(
        &self,
        control: ControlByte,
        value: i32,
        sensitivity: f64,
        max_param: i32,
    ) -> i32 {
        self.change_value_clamped(control, value, sensitivity, 0, max_param)
    }

    /// Applies one wire sample to a parameter value, clamped into
    /// `[min_param, max_param - 1]`.
    ///
    /// Never fails and never panics, regardless of input magnitude. The
    /// fractional result is truncated towards zero.
    #[must_use]
    pub fn change_value_clamped(
        &self,
        control: ControlByte,
        value: i32,
        sensitivity: f64,
        min_param: i32,
        max_param: i32,
    ) -> i32 {
        let changed = f64::from(value) + self.knob_change(control, sensitivity);
        // max()/min() instead of clamp(): an inverted or empty parameter
        // range must clamp silently, not panic.
        changed
            .max(f64::from(min_param))
            .min(f64::from(max_param) - 1.0) as i32
    }

    /// Projects an internal value onto the fixed `[0, 127]` display domain.
    ///
    /// Monotonic non-decreasing; approximate inverse of
    /// [`ValueTransform::to_internal_value`] modulo integer rounding.
    #[must_use]
    pub fn to_display_value(&self, value: i32) -> i32 {
        (i64::from(value) * 127 / i64::from(self.span())).clamp(0, 127) as i32
    }

    /// Maps a `[0, 127]` display value back into the internal value domain.
    #[must_use]
    pub fn to_internal_value(&self, display: i32) -> i32 {
        (i64::from(display.clamp(0, 127)) * i64::from(self.span()) / 127) as i32
    }

    /// Projects an internal value onto `[0.0, 1.0]`.
    #[must_use]
    pub fn to_normalized_value(&self, value: i32) -> f64 {
        (f64::from(value) / f64::from(self.span())).clamp(0.0, 1.0)
    }

    /// Maps a normalized value back into the internal value domain,
    /// rounded to the nearest integer and clamped into `[0, upper_bound)`.
    #[must_use]
    pub fn from_normalized_value(&self, normalized: f64) -> i32 {
        (normalized.clamp(0.0, 1.0) * f64::from(self.span())).round() as i32
    }
}
