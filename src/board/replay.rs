use shakmaty::{Chess, EnPassantMode, Position, fen::Fen, san::SanPlus};

use super::error::GameTableError;
use crate::log;

const RESULT_MARKERS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// PGN move-number tokens like "1." or "3...".
fn is_move_number(token: &str) -> bool {
    token.ends_with('.') || token.contains("...")
}

fn position_fen(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}

/// Replay a whitespace-separated SAN move string from the standard starting
/// position and collect the FEN of every board state along the way.
///
/// Index 0 is the starting position, so the result holds one more encoding
/// than there are moves. Moves are applied strictly in input order since
/// each one's legality depends on the position the previous one produced.
/// Move numbers and result markers are tolerated (and skipped) so pasted
/// PGN movetext replays as well; anything else that is not a legal move in
/// the current position aborts the replay.
pub fn replay_fens(moves: &str) -> Result<Vec<String>, GameTableError> {
    let mut pos = Chess::default();
    let mut fens = Vec::with_capacity(moves.split_whitespace().count() + 1);
    fens.push(position_fen(&pos));

    let mut ply: usize = 0;
    for token in moves.split_whitespace() {
        if is_move_number(token) || RESULT_MARKERS.contains(&token) {
            log::warn(format!("skipping movetext token '{}'", token));
            continue;
        }

        let san: SanPlus = token.parse().map_err(|e| GameTableError::IllegalMove {
            san: token.to_string(),
            ply,
            reason: format!("not a SAN move: {}", e),
        })?;
        let m = san
            .san
            .to_move(&pos)
            .map_err(|e| GameTableError::IllegalMove {
                san: token.to_string(),
                ply,
                reason: e.to_string(),
            })?;
        pos.play_unchecked(m);
        ply += 1;
        fens.push(position_fen(&pos));
    }

    Ok(fens)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_replay_length_is_moves_plus_one() {
        let fens = replay_fens("e4 e5 Nf3").unwrap();
        assert_eq!(fens.len(), 4);
    }

    #[test]
    fn test_replay_starts_from_standard_position() {
        let fens = replay_fens("e4").unwrap();
        assert_eq!(fens[0], STARTING_FEN);
    }

    #[test]
    fn test_replay_records_position_after_each_move() {
        let fens = replay_fens("e4").unwrap();
        assert_eq!(
            fens[1],
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
        );
    }

    #[test]
    fn test_replay_empty_input_yields_only_starting_position() {
        assert_eq!(replay_fens("").unwrap().len(), 1);
        assert_eq!(replay_fens("   ").unwrap().len(), 1);
    }

    #[test]
    fn test_replay_rejects_illegal_move() {
        // Qh5 is a fine move, just not from the starting position.
        let err = replay_fens("Qh5").unwrap_err();
        match err {
            GameTableError::IllegalMove { san, ply, .. } => {
                assert_eq!(san, "Qh5");
                assert_eq!(ply, 0);
            }
            other => panic!("expected IllegalMove, got {:?}", other),
        }
    }

    #[test]
    fn test_replay_rejects_unparseable_token() {
        let err = replay_fens("e4 zz9").unwrap_err();
        assert!(matches!(err, GameTableError::IllegalMove { ply: 1, .. }));
    }

    #[test]
    fn test_replay_aborts_on_first_bad_move() {
        // Legality is positional: Nf6 works for black on ply 1 but not for
        // white on ply 0.
        assert!(replay_fens("e4 Nf6").is_ok());
        assert!(replay_fens("Nf6 e4").is_err());
    }

    #[test]
    fn test_replay_skips_move_numbers() {
        let fens = replay_fens("1. e4 e5 2. Nf3").unwrap();
        assert_eq!(fens.len(), 4);
    }

    #[test]
    fn test_replay_skips_result_markers() {
        let fens = replay_fens("e4 e5 1-0").unwrap();
        assert_eq!(fens.len(), 3);
    }

    #[test]
    fn test_replay_handles_castling_and_captures() {
        let fens = replay_fens("e4 e5 Nf3 Nc6 Bc4 Bc5 O-O Nf6").unwrap();
        assert_eq!(fens.len(), 9);
        // White castled kingside: king on g1, rook on f1.
        assert!(fens[8].starts_with("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1"));
    }
}
