// SPDX-FileCopyrightText: The knobio authors
// SPDX-License-Identifier: MPL-2.0

#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(rustdoc::broken_intra_doc_links)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Repeating the type name in `..Default::default()` expressions
// is not needed since the context is obvious.
#![allow(clippy::default_trait_access)]

mod encoding;
pub use self::encoding::{ControlByte, Encoding};

mod transform;
pub use self::transform::{
    sensitivity_factor, RegistryError, TransformRegistry, ValueTransform, DEFAULT_SENSITIVITY,
    DEFAULT_STEP_SIZE, SENSITIVITY_MAX, SENSITIVITY_MIN,
};

pub mod binding;
