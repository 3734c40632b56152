// SPDX-FileCopyrightText: The knobio authors
// SPDX-License-Identifier: MPL-2.0

use std::collections::HashMap;

use thiserror::Error;

use super::{ValueTransform, DEFAULT_STEP_SIZE};
use crate::Encoding;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No transform has been registered for the requested encoding.
    ///
    /// A configuration defect: silently substituting a default codec would
    /// produce subtly wrong hardware behavior instead of a diagnosable
    /// error.
    #[error("no transform registered for encoding {0}")]
    Unregistered(Encoding),
}

/// Shared value transforms, one per encoding tag.
///
/// Owned and passed down by the composition root that builds a control
/// surface. Multiple independent surfaces each construct their own registry,
/// so tests and surfaces run in isolation without process-wide state.
///
/// Mutated at configuration-change time and read at control-event time,
/// both on the single control-event-dispatch thread.
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    transforms: HashMap<Encoding, ValueTransform>,
}

impl TransformRegistry {
    /// Upper bound of the preconfigured transforms.
    pub const DEFAULT_UPPER_BOUND: i32 = 127;

    const DEFAULT_ENCODINGS: [Encoding; 4] = [
        Encoding::TwosComplement,
        Encoding::OffsetBinary,
        Encoding::SignedBit,
        Encoding::SignedBit2,
    ];

    /// Creates a registry preconfigured with the four standard relative
    /// encodings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            transforms: HashMap::with_capacity(Self::DEFAULT_ENCODINGS.len()),
        };
        for encoding in Self::DEFAULT_ENCODINGS {
            registry.register(ValueTransform::new(
                encoding,
                Self::DEFAULT_UPPER_BOUND,
                DEFAULT_STEP_SIZE,
            ));
        }
        registry
    }

    /// Registers a transform, replacing any transform previously registered
    /// for the same encoding.
    pub fn register(&mut self, transform: ValueTransform) {
        log::debug!(
            "Registering transform for encoding {encoding}",
            encoding = transform.encoding()
        );
        self.transforms.insert(transform.encoding(), transform);
    }

    /// The shared transform for an encoding tag.
    ///
    /// Fails fast for an unmapped tag.
    pub fn get(&self, encoding: Encoding) -> Result<&ValueTransform, RegistryError> {
        self.transforms
            .get(&encoding)
            .ok_or(RegistryError::Unregistered(encoding))
    }

    pub fn get_mut(&mut self, encoding: Encoding) -> Result<&mut ValueTransform, RegistryError> {
        self.transforms
            .get_mut(&encoding)
            .ok_or(RegistryError::Unregistered(encoding))
    }

    /// Broadcasts a new sensitivity to every registered transform.
    ///
    /// The broadcast order is unspecified. The mutation is a plain field
    /// assignment per transform, so there is no partial-failure mode.
    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        log::debug!("Broadcasting sensitivity {sensitivity} to all registered transforms");
        for transform in self.transforms.values_mut() {
            transform.set_sensitivity(sensitivity);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValueTransform> {
        self.transforms.values()
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}
