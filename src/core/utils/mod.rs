pub mod random;
pub mod saturate;

pub use random::{xorshift32, Rng};
pub use saturate::{increase, increase_to, reduce, reduce_to, scale8};
