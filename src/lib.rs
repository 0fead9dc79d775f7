mod bind_info_ffi;
mod board;
mod duckdb_string;
mod game;
mod log;
mod scalars;

use duckdb::{Connection, Result};
use duckdb_ext_macros::duckdb_extension;
use game::ChessGameVTab;
use scalars::{ChessGameFensScalar, ChessPieceIconScalar};
use std::error::Error;

#[duckdb_extension(name = "chess_game", api_version = "v1.0.0")]
pub unsafe fn extension_entrypoint(con: Connection) -> Result<(), Box<dyn Error>> {
    // Table functions
    con.register_table_function::<ChessGameVTab>("chess_game")?;

    // Scalar functions
    con.register_scalar_function::<ChessGameFensScalar>("chess_game_fens")?;
    con.register_scalar_function::<ChessPieceIconScalar>("chess_piece_icon")?;

    Ok(())
}
