//! Core building blocks shared by both engines: the energy grid and the
//! saturating arithmetic / random helpers.

pub mod grid;
pub mod utils;
