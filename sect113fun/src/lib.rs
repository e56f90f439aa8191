#![doc = include_str!("../README.md")]
#![no_std]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod hex;

mod coordinates;
mod curve;
mod error;
mod field;
mod point;
#[cfg(feature = "alloc")]
mod table;

mod macros;

pub use coordinates::CoordinateSystem;
pub use curve::{Curve, CurveSpec, SECT113R2};
pub use error::Error;
pub use field::FieldElement;
pub use point::Point;
#[cfg(feature = "alloc")]
pub use table::LookupTable;

pub use rand_core;
pub use subtle;

#[cfg(feature = "serde")]
pub extern crate serde;

#[cfg(feature = "proptest")]
#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
pub mod proptest;
