use crate::board::icons::piece_icon;
use crate::board::replay::replay_fens;
use crate::duckdb_string::decode_duckdb_string;
use duckdb::{
    core::{DataChunkHandle, Inserter, LogicalTypeHandle, LogicalTypeId},
    vscalar::{ScalarFunctionSignature, VScalar},
    vtab::arrow::WritableVector,
};
use libduckdb_sys::duckdb_string_t;
use std::error::Error;
use std::ffi::CString;

/// `chess_game_fens(moves)`: the replayed encoding sequence as a JSON array
/// of FEN strings, index 0 the starting position.
pub struct ChessGameFensScalar;

fn fens_json(moves: &str) -> Result<String, Box<dyn Error>> {
    let fens = replay_fens(moves)?;
    Ok(serde_json::to_string(&fens)?)
}

impl VScalar for ChessGameFensScalar {
    type State = ();

    unsafe fn invoke(
        _state: &Self::State,
        input: &mut DataChunkHandle,
        output: &mut dyn WritableVector,
    ) -> Result<(), Box<dyn Error>> {
        let len = input.len();
        let input_vec = input.flat_vector(0);
        let mut output_vec = output.flat_vector();

        let input_slice = input_vec.as_slice::<duckdb_string_t>();

        for (i, s) in input_slice.iter().take(len).enumerate() {
            if input_vec.row_is_null(i as u64) {
                output_vec.set_null(i);
                continue;
            }

            // SAFETY: row nullability is checked above.
            let moves = unsafe { decode_duckdb_string(s) };
            output_vec.insert(i, CString::new(fens_json(&moves)?)?);
        }
        Ok(())
    }

    fn signatures() -> Vec<ScalarFunctionSignature> {
        vec![ScalarFunctionSignature::exact(
            vec![LogicalTypeHandle::from(LogicalTypeId::Varchar)],
            LogicalTypeHandle::from(LogicalTypeId::Varchar),
        )]
    }
}

/// `chess_piece_icon(piece)`: the display asset path for one piece letter.
pub struct ChessPieceIconScalar;

fn icon_for(symbol: &str) -> Result<&'static str, Box<dyn Error>> {
    let mut chars = symbol.chars();
    let piece = match (chars.next(), chars.next()) {
        (Some(piece), None) => piece,
        _ => return Err(format!("expected a single piece symbol, got '{}'", symbol).into()),
    };
    Ok(piece_icon(piece)?)
}

impl VScalar for ChessPieceIconScalar {
    type State = ();

    unsafe fn invoke(
        _state: &Self::State,
        input: &mut DataChunkHandle,
        output: &mut dyn WritableVector,
    ) -> Result<(), Box<dyn Error>> {
        let len = input.len();
        let input_vec = input.flat_vector(0);
        let mut output_vec = output.flat_vector();

        let input_slice = input_vec.as_slice::<duckdb_string_t>();

        for (i, s) in input_slice.iter().take(len).enumerate() {
            if input_vec.row_is_null(i as u64) {
                output_vec.set_null(i);
                continue;
            }

            // SAFETY: row nullability is checked above.
            let symbol = unsafe { decode_duckdb_string(s) };
            output_vec.insert(i, CString::new(icon_for(&symbol)?)?);
        }
        Ok(())
    }

    fn signatures() -> Vec<ScalarFunctionSignature> {
        vec![ScalarFunctionSignature::exact(
            vec![LogicalTypeHandle::from(LogicalTypeId::Varchar)],
            LogicalTypeHandle::from(LogicalTypeId::Varchar),
        )]
    }
}
