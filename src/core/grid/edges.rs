use serde::{Deserialize, Serialize};

use super::Grid;

/// How horizontal neighbours are read past the left/right edge of the grid.
///
/// The strip edges are physical edges of the lamp: `Clamp` repeats the edge
/// cell, `Wrap` treats the lamp as a cylinder, `Zero` treats the outside as
/// dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgePolicy {
    #[default]
    Clamp,
    Wrap,
    Zero,
}

impl Grid {
    /// Energy of the cell `dx` columns away from `(row, col)` under `policy`.
    pub fn horizontal_neighbor(&self, row: u32, col: u32, dx: i32, policy: EdgePolicy) -> u8 {
        let target = col as i32 + dx;
        if target >= 0 && target < self.cols as i32 {
            return self.get(row, target as u32);
        }
        match policy {
            EdgePolicy::Clamp => {
                let clamped = target.clamp(0, self.cols as i32 - 1);
                self.get(row, clamped as u32)
            }
            EdgePolicy::Wrap => {
                let wrapped = target.rem_euclid(self.cols as i32);
                self.get(row, wrapped as u32)
            }
            EdgePolicy::Zero => 0,
        }
    }
}
