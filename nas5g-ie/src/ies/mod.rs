//! NAS Information Elements (IEs)
//!
//! This module contains implementations of NAS Information Elements
//! as defined in 3GPP TS 24.501.
//!
//! ## IE Types
//!
//! - Type 1: Half-octet (4 bits) and single-octet layouts - [`ie1`]
//! - Tagged variant over all of the above - [`element`]

pub mod element;
pub mod ie1;

pub use element::{Ie, IeKind};
pub use ie1::*;
