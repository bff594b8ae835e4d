//! A three-component `f32` vector for graphics, physics and simulation code.
//!
//! [`Vector3`] is a plain `Copy` value with public `x`, `y` and `z` fields. The usual arithmetic
//! is available through operators, and the geometry helpers (`normalize`, `magnitude`, `dot`,
//! `cross`, `distance`) are associated functions so they read the same at every call site:
//!
//! ```
//! use vector3::Vector3;
//!
//! let u = Vector3::new(1.0, 0.0, 0.0);
//! let v = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(Vector3::cross(u, v), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(Vector3::dot(u, v), 0.0);
//! assert_eq!(Vector3::magnitude(2.0 * u - v * 0.0), 2.0);
//! ```
//!
//! The crate is `no_std`. Square roots are computed through `libm`, so results do not depend on
//! whether the target has a `std`.

#![deny(clippy::all)]
#![no_std]

#[cfg(test)]
extern crate std;

mod convert;
mod geometry;
mod vector3;

pub use vector3::Vector3;

use static_assertions::*;

// The type is passed to C and GPU code as `float[3]`.
assert_eq_size!(Vector3, [f32; 3]);
assert_eq_align!(Vector3, f32);
const_assert_eq!(core::mem::size_of::<Vector3>(), 12);
assert_impl_all!(Vector3: Copy, Send, Sync, Default, PartialEq, core::fmt::Debug);
assert_not_impl_any!(Vector3: Eq);
