//! Rule scenarios and randomized invariant checks against the public API.
//!
//! The randomized checks build boards by playing seeded random legal moves
//! from the opening, so every board they inspect is reachable in play.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use loa::board::{Cell, Color, Grid, Neighborhood, Position, ALL_COLORS};
use loa::movegen::{all_legal_moves, legal_destinations, line_counts};
use loa::resolve::{evaluate, is_connected, reachable_set, Outcome};
use loa::Game;

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Plays up to `plies` random legal moves with alternating colors.
fn random_board(rng: &mut SmallRng, plies: usize) -> Grid {
    let mut grid = Grid::standard();
    let mut color = Color::Black;
    for _ in 0..plies {
        let moves = all_legal_moves(&grid, color);
        let Some(mv) = moves.choose(rng) else {
            break;
        };
        grid.move_piece(mv.from, mv.to).unwrap();
        color = color.opponent();
    }
    grid
}

/// Reference connectivity: flood fill over the full adjacency relation.
fn components(grid: &Grid, color: Color) -> usize {
    let pieces: Vec<Position> = grid.pieces(color).collect();
    let mut seen = BTreeSet::new();
    let mut count = 0;
    for &start in &pieces {
        if !seen.insert(start) {
            continue;
        }
        count += 1;
        let mut frontier = vec![start];
        while let Some(cur) = frontier.pop() {
            for &other in &pieces {
                let adjacent = cur.row.abs_diff(other.row) <= 1 && cur.col.abs_diff(other.col) <= 1;
                if adjacent && seen.insert(other) {
                    frontier.push(other);
                }
            }
        }
    }
    count
}

#[test]
fn fresh_board_setup() {
    let grid = Grid::standard();
    assert_eq!(grid.count(Color::Black), 12);
    assert_eq!(grid.count(Color::White), 12);
    for pos in grid.pieces(Color::Black) {
        assert!(pos.row == 0 || pos.row == 7);
        assert!((1..=6).contains(&pos.col));
    }
    for pos in grid.pieces(Color::White) {
        assert!(pos.col == 0 || pos.col == 7);
        assert!((1..=6).contains(&pos.row));
    }
    for corner in [p(0, 0), p(0, 7), p(7, 0), p(7, 7)] {
        assert_eq!(grid.cell(corner), Ok(Cell::Empty));
    }
}

#[test]
fn scenario_opening_destinations() {
    let mut grid = Grid::standard();
    assert_eq!(legal_destinations(&grid, p(0, 6)).unwrap(), vec![p(0, 0), p(2, 6), p(2, 4)]);

    grid.move_piece(p(1, 7), p(1, 6)).unwrap();
    assert_eq!(legal_destinations(&grid, p(0, 6)).unwrap(), vec![p(0, 0), p(1, 7), p(2, 4)]);
}

#[test]
fn scenario_line_counts() {
    let grid = Grid::standard();
    let c = line_counts(&grid, p(7, 3)).unwrap();
    assert_eq!((c.row, c.col, c.diagonal, c.anti_diagonal), (6, 2, 2, 2));
}

#[test]
fn scenario_black_connects_first() {
    let mut grid = Grid::standard();
    assert!(!is_connected(&grid, Color::Black));
    assert!(!is_connected(&grid, Color::White));

    for col in 1..7 {
        grid.move_piece(p(0, col), p(6, col)).unwrap();
    }
    assert!(is_connected(&grid, Color::Black));
    assert!(!is_connected(&grid, Color::White));
    assert_eq!(evaluate(&grid).outcome(), Outcome::Win(Color::Black));
}

#[test]
fn scenario_draw_then_broken() {
    let mut grid = Grid::standard();
    for col in 1..7 {
        grid.move_piece(p(0, col), p(6, col)).unwrap();
    }
    // The last of these lands on (6,1) and captures a black piece.
    for row in 1..7 {
        grid.move_piece(p(row, 7), p(row, 1)).unwrap();
    }
    assert_eq!(grid.count(Color::Black), 11);
    assert_eq!(evaluate(&grid).outcome(), Outcome::Draw);

    grid.move_piece(p(1, 1), p(1, 2)).unwrap();
    assert_eq!(evaluate(&grid).outcome(), Outcome::Draw);

    grid.move_piece(p(1, 2), p(1, 3)).unwrap();
    assert!(is_connected(&grid, Color::Black));
    assert!(!is_connected(&grid, Color::White));
    assert_eq!(evaluate(&grid).outcome(), Outcome::Win(Color::Black));
}

#[test]
fn scenario_full_game_through_session() {
    let mut game = Game::standard();
    game.play(p(0, 6), p(2, 4)).unwrap();
    game.play(p(1, 7), p(1, 5)).unwrap();
    assert_eq!(game.rounds_completed(), 1);
    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn randomized_move_and_capture_invariant() {
    let mut rng = SmallRng::seed_from_u64(0x10a);
    for _ in 0..200 {
        let plies = rng.gen_range(0..40);
        let grid = random_board(&mut rng, plies);
        for color in ALL_COLORS {
            for mv in all_legal_moves(&grid, color) {
                let before = grid.cell(mv.to).unwrap();
                let mut after = grid.clone();
                let captured = after.move_piece(mv.from, mv.to).unwrap();

                assert_eq!(after.cell(mv.from), Ok(Cell::Empty));
                assert_eq!(after.cell(mv.to), Ok(Cell::from(color)));
                assert_eq!(after.count(color), grid.count(color));
                let was_capture = before.holds(color.opponent());
                assert_eq!(captured.is_some(), was_capture);
                assert_eq!(
                    after.count(color.opponent()) + usize::from(was_capture),
                    grid.count(color.opponent())
                );
            }
        }
    }
}

#[test]
fn randomized_no_self_capture() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        let plies = rng.gen_range(0..60);
        let grid = random_board(&mut rng, plies);
        for color in ALL_COLORS {
            for pos in grid.pieces(color) {
                for dest in legal_destinations(&grid, pos).unwrap() {
                    assert!(!grid.cell(dest).unwrap().holds(color));
                    assert_ne!(dest, pos);
                }
            }
        }
    }
}

#[test]
fn randomized_row_count_symmetry() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..200 {
        let plies = rng.gen_range(0..60);
        let grid = random_board(&mut rng, plies);
        for row in 0..grid.dim() {
            let occupied = (0..grid.dim())
                .filter(|&col| !grid.cell(p(row, col)).unwrap().is_empty())
                .count();
            for col in 0..grid.dim() {
                if let Ok(counts) = line_counts(&grid, p(row, col)) {
                    assert_eq!(counts.row, occupied);
                }
            }
        }
    }
}

#[test]
fn randomized_connectivity_soundness() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..300 {
        let plies = rng.gen_range(0..80);
        let grid = random_board(&mut rng, plies);
        for color in ALL_COLORS {
            assert_eq!(is_connected(&grid, color), components(&grid, color) <= 1);
            if let Some(seed) = grid.first_piece(color) {
                let group = reachable_set(&grid, seed).unwrap();
                assert!(group.iter().all(|&q| grid.cell(q).unwrap().holds(color)));
                // Closed under adjacency: no same-colored neighbor is missing.
                for &q in &group {
                    for n in Neighborhood::around(q, grid.dim()).positions() {
                        if grid.cell(n).unwrap().holds(color) {
                            assert!(group.contains(&n));
                        }
                    }
                }
            }
        }
    }
}
