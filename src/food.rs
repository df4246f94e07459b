use crate::config::GridSize;
use crate::random::RandomSource;
use crate::snake::{Position, Snake};

/// Cells not occupied by the snake, in row-major order (y outer, x inner).
#[must_use]
pub fn free_cells(snake: &Snake, grid: GridSize) -> Vec<Position> {
    let side = i32::from(grid.get());
    let mut cells = Vec::with_capacity(grid.total_cells().saturating_sub(snake.len()));

    for y in 0..side {
        for x in 0..side {
            let position = Position { x, y };
            if !snake.occupies(position) {
                cells.push(position);
            }
        }
    }

    cells
}

/// Picks a free cell uniformly at random, or `None` when the board is full.
///
/// Exactly one draw is consumed when a free cell exists and none otherwise.
/// The draw `u` selects index `floor(u * free_count)` of [`free_cells`]; a
/// draw at or above `1.0` is clamped to the last cell.
#[must_use]
pub fn place_food<R: RandomSource + ?Sized>(
    snake: &Snake,
    grid: GridSize,
    rng: &mut R,
) -> Option<Position> {
    let cells = free_cells(snake, grid);
    if cells.is_empty() {
        return None;
    }

    let draw = rng.next_unit().max(0.0);
    let index = ((draw * cells.len() as f64).floor() as usize).min(cells.len() - 1);
    Some(cells[index])
}
