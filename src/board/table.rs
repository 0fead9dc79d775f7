use super::error::GameTableError;
use super::fen::{PieceRow, decode_placement};
use super::replay::replay_fens;

/// Occupied squares in the starting position; used to pre-reserve storage.
const START_PIECES: usize = 32;

/// Build the full game table for one SAN move string: every position in the
/// replay decoded to piece rows, each row stamped with the 0-based index of
/// the position it came from (0 = before any move).
///
/// Rows accumulate into one pre-reserved buffer, turn ascending and decode
/// order within a turn, so the build stays linear in the total row count.
pub fn game_table(moves: &str) -> Result<Vec<PieceRow>, GameTableError> {
    let fens = replay_fens(moves)?;

    let mut rows = Vec::with_capacity(fens.len() * START_PIECES);
    for (turn, fen) in fens.iter().enumerate() {
        for mut row in decode_placement(fen)? {
            row.turn = Some(turn as u32);
            rows.push(row);
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_table_row_count_without_captures() {
        // 4 positions x 32 pieces, nothing captured yet.
        let rows = game_table("e4 e5 Nf3").unwrap();
        assert_eq!(rows.len(), 128);
    }

    #[test]
    fn test_game_table_stamps_turns_in_ascending_order() {
        let rows = game_table("e4 e5 Nf3").unwrap();
        for turn in 0..4 {
            assert_eq!(
                rows.iter().filter(|r| r.turn == Some(turn)).count(),
                32,
                "turn {} should decode the full position",
                turn
            );
        }
        assert!(rows.windows(2).all(|w| w[0].turn <= w[1].turn));
    }

    #[test]
    fn test_game_table_capture_shrinks_later_turns() {
        let rows = game_table("e4 d5 exd5").unwrap();
        assert_eq!(rows.iter().filter(|r| r.turn == Some(2)).count(), 32);
        assert_eq!(rows.iter().filter(|r| r.turn == Some(3)).count(), 31);
        assert_eq!(rows.len(), 32 * 3 + 31);
    }

    #[test]
    fn test_game_table_tracks_a_moved_pawn() {
        let rows = game_table("e4").unwrap();
        // Before the move the white e-pawn sits on the seventh rank string.
        assert!(rows
            .iter()
            .any(|r| r.turn == Some(0) && r.piece == 'P' && (r.x, r.y) == (7, 5)));
        // After it the square is vacated and the pawn shows up mid-board.
        assert!(!rows
            .iter()
            .any(|r| r.turn == Some(1) && (r.x, r.y) == (7, 5)));
        assert!(rows
            .iter()
            .any(|r| r.turn == Some(1) && r.piece == 'P' && (r.x, r.y) == (5, 5)));
    }

    #[test]
    fn test_game_table_propagates_replay_failure() {
        let err = game_table("e4 e4").unwrap_err();
        assert!(matches!(err, GameTableError::IllegalMove { .. }));
    }

    #[test]
    fn test_game_table_empty_input_is_one_position() {
        let rows = game_table("").unwrap();
        assert_eq!(rows.len(), 32);
        assert!(rows.iter().all(|r| r.turn == Some(0)));
    }
}
