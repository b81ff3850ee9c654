pub mod layout;

pub use layout::{ColumnRun, SerpentineLayout};
