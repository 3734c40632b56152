// SPDX-FileCopyrightText: The knobio authors
// SPDX-License-Identifier: MPL-2.0

//! Boundary between physical relative controls and host-owned parameters.
//!
//! The transport layer decides which MIDI lane a sample arrived on and which
//! physical control it belongs to; this module only covers the last step:
//! applying one decoded tick of a bound control to the parameter it drives.

use crate::{ControlByte, Encoding, RegistryError, TransformRegistry, DEFAULT_SENSITIVITY};

/// A host-owned integer parameter slot.
///
/// Implemented by the DAW facade. Values live in `[0, max_value())`.
pub trait Parameter {
    /// Current internal value.
    #[must_use]
    fn value(&self) -> i32;

    /// Exclusive upper bound of the internal value domain.
    #[must_use]
    fn max_value(&self) -> i32;

    /// Store a new internal value.
    fn set_value(&mut self, value: i32);
}

/// A physical relative control bound to an encoding tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundEncoder {
    encoding: Encoding,
    sensitivity: f64,
}

impl BoundEncoder {
    #[must_use]
    pub const fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }

    #[must_use]
    pub const fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.sensitivity = sensitivity;
    }

    /// Applies one wire sample to the bound parameter and writes the
    /// clamped result back.
    ///
    /// Returns the new internal value. Fails only if no transform is
    /// registered for the bound encoding.
    pub fn apply(
        &self,
        registry: &TransformRegistry,
        control: ControlByte,
        parameter: &mut impl Parameter,
    ) -> Result<i32, RegistryError> {
        let transform = registry.get(self.encoding)?;
        let value = transform.change_value(
            control,
            parameter.value(),
            self.sensitivity,
            parameter.max_value(),
        );
        log::trace!(
            "Applied control {control} ({encoding}): {old} -> {value}",
            encoding = self.encoding,
            old = parameter.value()
        );
        parameter.set_value(value);
        Ok(value)
    }
}
