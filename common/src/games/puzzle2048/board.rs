use super::types::{Direction, GameStatus, MoveResult};

pub const BOARD_SIZE: usize = 4;

/// Row-major grid of tile values, 0 for an empty cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Board {
    cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[u32; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for (row, values) in self.cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Whether any two horizontally or vertically adjacent cells hold the same
    /// non-zero value. Checks every pair, including the last row and column.
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.cells[row][col];
                if value == 0 {
                    continue;
                }
                if col + 1 < BOARD_SIZE && value == self.cells[row][col + 1] {
                    return true;
                }
                if row + 1 < BOARD_SIZE && value == self.cells[row + 1][col] {
                    return true;
                }
            }
        }
        false
    }

    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|&v| v == value)
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Slides every row (Left/Right) or column (Up/Down) toward `direction`.
    pub fn apply_move(&self, direction: Direction) -> MoveResult {
        let mut board = *self;
        let mut score_delta = 0;

        for index in 0..BOARD_SIZE {
            let coords = line_coords(direction, index);
            let line: Vec<u32> = coords.iter().map(|&(r, c)| self.cells[r][c]).collect();
            let (merged, score) = slide_and_merge_line(&line);
            score_delta += score;
            for (&(r, c), value) in coords.iter().zip(merged) {
                board.cells[r][c] = value;
            }
        }

        MoveResult {
            board,
            score_delta,
            changed: board != *self,
        }
    }

    /// Won takes precedence over Lost.
    pub fn status(&self, target_value: u32) -> GameStatus {
        if self.contains(target_value) {
            GameStatus::Won
        } else if self.is_full() && !self.has_adjacent_pair() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

/// Cell coordinates of line `index`, ordered from the edge tiles slide toward.
/// Right and Down walk their line backwards, so the same left-slide serves
/// all four directions and writing back through the same coordinates undoes
/// the reversal.
fn line_coords(direction: Direction, index: usize) -> [(usize, usize); BOARD_SIZE] {
    std::array::from_fn(|i| match direction {
        Direction::Left => (index, i),
        Direction::Right => (index, BOARD_SIZE - 1 - i),
        Direction::Up => (i, index),
        Direction::Down => (BOARD_SIZE - 1 - i, index),
    })
}

/// Slides one line toward index 0 and merges equal neighbours once.
/// Returns the new line, padded with zeros to the input length, and the sum of
/// the merged values.
pub fn slide_and_merge_line(line: &[u32]) -> (Vec<u32>, u32) {
    let mut tiles: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut score = 0;

    let mut i = 0;
    while i + 1 < tiles.len() {
        if tiles[i] == tiles[i + 1] {
            tiles[i] *= 2;
            tiles[i + 1] = 0;
            score += tiles[i];
            i += 2;
        } else {
            i += 1;
        }
    }

    tiles.retain(|&v| v != 0);
    tiles.resize(line.len(), 0);
    (tiles, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(row: [u32; 4]) -> Board {
        Board::from_rows([row, [0; 4], [0; 4], [0; 4]])
    }

    #[test]
    fn test_slide_three_equal_merges_leftmost_pair() {
        let (result, score) = slide_and_merge_line(&[2, 2, 2, 0]);
        assert_eq!(result, vec![4, 2, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_slide_four_equal_merges_disjoint_pairs() {
        let (result, score) = slide_and_merge_line(&[2, 2, 2, 2]);
        assert_eq!(result, vec![4, 4, 0, 0]);
        assert_eq!(score, 8);
    }

    #[test]
    fn test_slide_merged_tile_not_merged_again() {
        let (result, score) = slide_and_merge_line(&[4, 4, 8, 0]);
        assert_eq!(result, vec![8, 8, 0, 0]);
        assert_eq!(score, 8);
    }

    #[test]
    fn test_slide_closes_gaps_before_merging() {
        let (result, score) = slide_and_merge_line(&[2, 0, 0, 2]);
        assert_eq!(result, vec![4, 0, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_slide_no_merge() {
        let (result, score) = slide_and_merge_line(&[2, 4, 8, 16]);
        assert_eq!(result, vec![2, 4, 8, 16]);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_slide_handles_other_lengths() {
        let (result, score) = slide_and_merge_line(&[0, 2, 2, 8, 8, 8]);
        assert_eq!(result, vec![4, 16, 8, 0, 0, 0]);
        assert_eq!(score, 20);
    }

    #[test]
    fn test_move_left_and_right_on_trailing_pair() {
        let board = row_board([0, 0, 2, 2]);

        let left = board.apply_move(Direction::Left);
        assert_eq!(left.board.rows()[0], [4, 0, 0, 0]);
        assert_eq!(left.score_delta, 4);
        assert!(left.changed);

        let right = board.apply_move(Direction::Right);
        assert_eq!(right.board.rows()[0], [0, 0, 0, 4]);
        assert_eq!(right.score_delta, 4);
        assert!(right.changed);
    }

    #[test]
    fn test_move_right_three_equal_merges_pair_nearest_wall() {
        let result = row_board([2, 2, 2, 0]).apply_move(Direction::Right);
        assert_eq!(result.board.rows()[0], [0, 0, 2, 4]);
    }

    #[test]
    fn test_move_up_and_down_on_column() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [2, 0, 0, 0],
            [4, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        let up = board.apply_move(Direction::Up);
        assert_eq!(up.board.cell(0, 0), 4);
        assert_eq!(up.board.cell(1, 0), 4);
        assert_eq!(up.board.cell(2, 0), 0);

        let down = board.apply_move(Direction::Down);
        assert_eq!(down.board.cell(3, 0), 4);
        assert_eq!(down.board.cell(2, 0), 4);
        assert_eq!(down.board.cell(1, 0), 0);
    }

    #[test]
    fn test_score_delta_sums_every_merge() {
        let board = Board::from_rows([
            [2, 2, 0, 0],
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let result = board.apply_move(Direction::Left);
        assert_eq!(result.score_delta, 8);
    }

    #[test]
    fn test_unchanged_move_reports_no_change() {
        let board = Board::from_rows([
            [2, 4, 0, 0],
            [8, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let result = board.apply_move(Direction::Left);
        assert!(!result.changed);
        assert_eq!(result.board, board);
        assert_eq!(result.score_delta, 0);
    }

    #[test]
    fn test_repeated_move_settles() {
        let board = Board::from_rows([
            [2, 2, 4, 8],
            [0, 4, 0, 4],
            [16, 0, 16, 2],
            [2, 4, 8, 16],
        ]);
        for direction in Direction::ALL {
            let mut current = board;
            // Each productive move removes a tile or a gap, so this terminates.
            loop {
                let result = current.apply_move(direction);
                if !result.changed {
                    break;
                }
                current = result.board;
            }
            let again = current.apply_move(direction);
            assert!(!again.changed, "{:?}", direction);
            assert_eq!(again.board, current);
        }
    }

    #[test]
    fn test_left_then_right_moves_compacted_row_to_other_side() {
        let board = row_board([2, 4, 8, 0]);
        let left = board.apply_move(Direction::Left);
        assert!(!left.changed);
        let right = left.board.apply_move(Direction::Right);
        assert_eq!(right.board.rows()[0], [0, 2, 4, 8]);
        assert_eq!(right.score_delta, 0);
    }

    #[test]
    fn test_status_lost_when_full_without_pairs() {
        let board = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert_eq!(board.status(2048), GameStatus::Lost);
    }

    #[test]
    fn test_status_in_progress_with_empty_cell() {
        let board = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 0],
        ]);
        assert_eq!(board.status(2048), GameStatus::InProgress);
    }

    #[test]
    fn test_status_in_progress_with_pair_in_last_row() {
        let board = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 8, 8],
        ]);
        assert_eq!(board.status(2048), GameStatus::InProgress);
    }

    #[test]
    fn test_status_in_progress_with_pair_in_last_column() {
        let board = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 16],
            [4, 2, 4, 16],
        ]);
        assert_eq!(board.status(2048), GameStatus::InProgress);
    }

    #[test]
    fn test_status_won_on_partial_board() {
        let board = row_board([2048, 0, 0, 0]);
        assert_eq!(board.status(2048), GameStatus::Won);
    }

    #[test]
    fn test_status_won_takes_precedence_over_lost() {
        let board = Board::from_rows([
            [2048, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert_eq!(board.status(2048), GameStatus::Won);
    }

    #[test]
    fn test_empty_cells_and_counts() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [0, 64, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 8],
        ]);
        assert_eq!(board.empty_cells().len(), 13);
        assert!(!board.empty_cells().contains(&(1, 1)));
        assert_eq!(board.tile_count(), 3);
        assert_eq!(board.highest_tile(), 64);
        assert!(!board.is_full());
        assert!(!board.has_adjacent_pair());
    }
}
