// patterns.rs - Classic seed patterns, stamped near the middle of the
// default 100x100 grid

use life_engine::GameOfLife;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(7, 6), (8, 7), (6, 8), (7, 8), (8, 8)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(49, 50), (50, 50), (51, 50)],
    },
    Pattern {
        name: "Toad",
        cells: &[(50, 49), (51, 49), (52, 49), (49, 50), (50, 50), (51, 50)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (30, 30), (31, 30), (30, 31), (31, 31),
            (32, 32), (33, 32), (32, 33), (33, 33),
        ],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (48, 44), (49, 44), (50, 44), (54, 44), (55, 44), (56, 44),
            (46, 46), (51, 46), (53, 46), (58, 46),
            (46, 47), (51, 47), (53, 47), (58, 47),
            (46, 48), (51, 48), (53, 48), (58, 48),
            (48, 49), (49, 49), (50, 49), (54, 49), (55, 49), (56, 49),
            // Bottom half (mirrored)
            (48, 51), (49, 51), (50, 51), (54, 51), (55, 51), (56, 51),
            (46, 52), (51, 52), (53, 52), (58, 52),
            (46, 53), (51, 53), (53, 53), (58, 53),
            (46, 54), (51, 54), (53, 54), (58, 54),
            (48, 56), (49, 56), (50, 56), (54, 56), (55, 56), (56, 56),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(50, 50), (51, 50), (51, 49), (50, 51), (49, 51)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (21, 25), (22, 25), (21, 26), (22, 26),
            (31, 25), (31, 26), (31, 27), (32, 24), (32, 28), (33, 23), (33, 29),
            (34, 23), (34, 29), (35, 26), (36, 24), (36, 28), (37, 25), (37, 26),
            (37, 27), (38, 26), (41, 23), (41, 24), (41, 25), (42, 23), (42, 24),
            (42, 25), (43, 22), (43, 26), (45, 21), (45, 22), (45, 26), (45, 27),
            (55, 23), (55, 24), (56, 23), (56, 24),
        ],
    },
];

/// Clears the grid and stamps the pattern through the engine's cell writes.
pub fn apply_pattern(game: &mut GameOfLife, pattern: &Pattern) {
    game.clear();

    for &(x, y) in pattern.cells {
        // Cells that fall outside the grid are simply dropped
        let _ = game.set_cell(x, y, true);
    }
}
