// engine.rs - Toroidal Game of Life simulation core

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::LifeError;

/// Probability that a cell starts alive when a grid is seeded.
const ALIVE_PROBABILITY: f64 = 0.2;

/// Conway's Game of Life on a toroidal grid.
///
/// The engine owns a `width x height` boolean grid and advances it one
/// generation at a time under the standard rule: a live cell survives with
/// 2 or 3 live neighbors, a dead cell is born with exactly 3. Neighbor
/// lookups wrap around both edges, so the grid has no borders.
///
/// All mutation goes through the engine's own methods and at most one
/// mutating call may be in flight at a time; there is no internal locking.
#[derive(Debug)]
pub struct GameOfLife {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    next_cells: Vec<bool>,
    seed: u32,
    generation: u64,
}

impl GameOfLife {
    /// Creates a game with every cell independently alive with
    /// probability 0.2.
    ///
    /// A `seed` of 0 means "pick one": a fresh nonzero seed is drawn from
    /// OS entropy so every launch looks different. Any other value gives a
    /// grid that is reproducible across runs.
    pub fn new(width: usize, height: usize, seed: u32) -> Result<GameOfLife, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }

        let seed = if seed == 0 {
            rand::thread_rng().gen_range(1..=u32::MAX)
        } else {
            seed
        };

        let mut rng = StdRng::seed_from_u64(u64::from(seed));
        let cells = (0..width * height)
            .map(|_| rng.gen_bool(ALIVE_PROBABILITY))
            .collect();

        Ok(GameOfLife {
            width,
            height,
            cells,
            next_cells: vec![false; width * height],
            seed,
            generation: 0,
        })
    }

    /// Advances the simulation by one generation.
    ///
    /// Every neighbor count is taken from the pre-step grid; the successor
    /// is built in a scratch buffer and swapped in whole, so no cell ever
    /// observes a same-step update of another cell.
    pub fn advance(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let count = self.live_neighbors(x, y);
                let alive = self.cells[y * self.width + x];

                self.next_cells[y * self.width + x] = match (alive, count) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next_cells);
        self.generation += 1;
    }

    /// Returns the state of the cell at `(x, y)`.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrites a single cell. Manual edits never touch the generation
    /// counter.
    pub fn set_cell(&mut self, x: usize, y: usize, value: bool) -> Result<(), LifeError> {
        let i = self.index(x, y)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Flips a single cell and returns its new state.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<bool, LifeError> {
        let i = self.index(x, y)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Kills every cell. Like [`set_cell`](Self::set_cell), this is an
    /// edit, not a step: the generation counter keeps its value.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The seed actually used, after a zero seed has been replaced by a
    /// drawn one.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of completed [`advance`](Self::advance) calls since
    /// construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells on the current grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Counts live cells in the Moore neighborhood of `(x, y)`, wrapping
    /// both coordinates around the grid edges.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let nx = (x as isize + dx).rem_euclid(self.width as isize) as usize;
                let ny = (y as isize + dy).rem_euclid(self.height as isize) as usize;

                if self.cells[ny * self.width + nx] {
                    count += 1;
                }
            }
        }

        count
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::OutOfRange { x, y });
        }
        Ok(y * self.width + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dead_grid(width: usize, height: usize) -> GameOfLife {
        let mut game = GameOfLife::new(width, height, 1).unwrap();
        game.clear();
        game
    }

    fn snapshot(game: &GameOfLife) -> Vec<bool> {
        let mut cells = Vec::with_capacity(game.width() * game.height());
        for y in 0..game.height() {
            for x in 0..game.width() {
                cells.push(game.get_cell(x, y).unwrap());
            }
        }
        cells
    }

    #[test]
    fn when_constructed_with_the_same_seed_two_games_evolve_identically() {
        let mut a = GameOfLife::new(30, 20, 42).unwrap();
        let mut b = GameOfLife::new(30, 20, 42).unwrap();

        for _ in 0..10 {
            assert_eq!(snapshot(&a), snapshot(&b));
            a.advance();
            b.advance();
        }
        assert_eq!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn when_constructed_with_a_zero_dimension_construction_fails() {
        assert_eq!(
            GameOfLife::new(0, 10, 1).unwrap_err(),
            LifeError::InvalidDimensions {
                width: 0,
                height: 10
            }
        );
        assert_eq!(
            GameOfLife::new(10, 0, 1).unwrap_err(),
            LifeError::InvalidDimensions {
                width: 10,
                height: 0
            }
        );
    }

    #[test]
    fn when_a_real_seed_is_passed_it_is_echoed_back() {
        let game = GameOfLife::new(10, 10, 42).unwrap();
        assert_eq!(game.seed(), 42);
    }

    #[test]
    fn when_seed_zero_is_passed_a_fresh_seed_is_drawn() {
        let game = GameOfLife::new(10, 10, 0).unwrap();
        assert_ne!(game.seed(), 0);
    }

    #[test]
    fn when_a_grid_is_seeded_roughly_a_fifth_of_it_is_alive() {
        let game = GameOfLife::new(100, 100, 7).unwrap();
        let density = game.population() as f64 / 10_000.0;
        assert!(density > 0.15 && density < 0.25, "density was {}", density);
    }

    #[test]
    fn when_a_dead_cell_has_exactly_three_live_neighbors_it_is_born() {
        let mut game = dead_grid(5, 5);
        game.set_cell(1, 1, true).unwrap();
        game.set_cell(2, 1, true).unwrap();
        game.set_cell(3, 1, true).unwrap();

        game.advance();

        assert!(game.get_cell(2, 2).unwrap());
    }

    #[test]
    fn when_a_live_cell_has_three_live_neighbors_it_survives() {
        let mut game = dead_grid(5, 5);
        game.set_cell(1, 1, true).unwrap();
        game.set_cell(2, 1, true).unwrap();
        game.set_cell(3, 1, true).unwrap();
        game.set_cell(2, 2, true).unwrap();

        game.advance();

        assert!(game.get_cell(2, 2).unwrap());
    }

    #[test]
    fn when_a_live_cell_has_fewer_than_two_live_neighbors_it_dies() {
        // A lone cell has zero neighbors, a pair has one each.
        let mut game = dead_grid(7, 7);
        game.set_cell(1, 1, true).unwrap();
        game.set_cell(4, 4, true).unwrap();
        game.set_cell(5, 4, true).unwrap();

        game.advance();

        assert_eq!(game.population(), 0);
    }

    #[test]
    fn when_a_live_cell_sits_in_a_corner_it_is_a_neighbor_across_both_edges() {
        // (0,0), (4,0) and (0,4) are mutual neighbors of (4,4) on a torus,
        // so (4,4) is born and the trio survives as a wrapped block.
        let mut game = dead_grid(5, 5);
        game.set_cell(0, 0, true).unwrap();
        game.set_cell(4, 0, true).unwrap();
        game.set_cell(0, 4, true).unwrap();

        game.advance();

        assert!(game.get_cell(4, 4).unwrap());
        assert!(game.get_cell(0, 0).unwrap());
        assert!(game.get_cell(4, 0).unwrap());
        assert!(game.get_cell(0, 4).unwrap());
        assert_eq!(game.population(), 4);
    }

    #[test]
    fn when_a_block_still_life_is_advanced_it_never_changes() {
        let mut game = dead_grid(7, 7);
        game.set_cell(2, 2, true).unwrap();
        game.set_cell(3, 2, true).unwrap();
        game.set_cell(2, 3, true).unwrap();
        game.set_cell(3, 3, true).unwrap();
        let before = snapshot(&game);

        for _ in 0..5 {
            game.advance();
            assert_eq!(snapshot(&game), before);
        }
    }

    #[test]
    fn when_a_blinker_is_advanced_it_oscillates_with_period_two() {
        let mut game = dead_grid(5, 5);
        game.set_cell(1, 2, true).unwrap();
        game.set_cell(2, 2, true).unwrap();
        game.set_cell(3, 2, true).unwrap();
        let horizontal = snapshot(&game);

        game.advance();
        assert!(game.get_cell(2, 1).unwrap());
        assert!(game.get_cell(2, 2).unwrap());
        assert!(game.get_cell(2, 3).unwrap());
        assert_eq!(game.population(), 3);

        game.advance();
        assert_eq!(snapshot(&game), horizontal);
    }

    #[test]
    fn when_the_game_is_advanced_n_times_the_generation_counter_reads_n() {
        let mut game = GameOfLife::new(10, 10, 3).unwrap();
        assert_eq!(game.generation(), 0);

        for n in 1..=5 {
            game.advance();
            assert_eq!(game.generation(), n);
        }
    }

    #[test]
    fn when_a_cell_is_set_it_reads_back_and_the_generation_is_untouched() {
        let mut game = dead_grid(5, 5);
        game.advance();
        let generation = game.generation();

        game.set_cell(3, 4, true).unwrap();
        assert!(game.get_cell(3, 4).unwrap());
        assert_eq!(game.generation(), generation);

        game.set_cell(3, 4, false).unwrap();
        assert!(!game.get_cell(3, 4).unwrap());
        assert_eq!(game.generation(), generation);
    }

    #[test]
    fn when_a_cell_is_toggled_its_new_state_is_returned() {
        let mut game = dead_grid(5, 5);
        assert!(game.toggle_cell(2, 2).unwrap());
        assert!(game.get_cell(2, 2).unwrap());
        assert!(!game.toggle_cell(2, 2).unwrap());
        assert!(!game.get_cell(2, 2).unwrap());
    }

    #[test]
    fn when_a_cell_access_is_out_of_range_it_fails() {
        let mut game = dead_grid(5, 4);

        assert_eq!(
            game.get_cell(5, 0).unwrap_err(),
            LifeError::OutOfRange { x: 5, y: 0 }
        );
        assert_eq!(
            game.get_cell(0, 4).unwrap_err(),
            LifeError::OutOfRange { x: 0, y: 4 }
        );
        assert_eq!(
            game.set_cell(5, 4, true).unwrap_err(),
            LifeError::OutOfRange { x: 5, y: 4 }
        );
        assert_eq!(
            game.toggle_cell(9, 9).unwrap_err(),
            LifeError::OutOfRange { x: 9, y: 9 }
        );
    }

    #[test]
    fn when_the_grid_is_cleared_every_cell_dies_and_the_generation_stays() {
        let mut game = GameOfLife::new(20, 20, 9).unwrap();
        game.advance();
        game.advance();

        game.clear();

        assert_eq!(game.population(), 0);
        assert_eq!(game.generation(), 2);
    }
}
