use crate::bind_info_ffi::{NamedParameterVarchar, get_named_parameter_varchar};
use crate::board::fen::PieceRow;
use crate::board::icons::piece_icon;
use crate::board::table::game_table;
use duckdb::{
    core::{DataChunkHandle, Inserter, LogicalTypeHandle, LogicalTypeId},
    vtab::{BindInfo, InitInfo, TableFunctionInfo, VTab},
};
use std::error::Error;
use std::ffi::CString;
use std::sync::Mutex;

const MOVES_PARAM_INDEX: u64 = 0;
const ROWS_PER_CHUNK: usize = 2048;

#[repr(C)]
pub struct ChessGameBindData {
    rows: Vec<PieceRow>,
    icons: bool,
}

#[repr(C)]
pub struct ChessGameInitData {
    next_row: Mutex<usize>,
}

/// `chess_game(moves)`: one row per occupied square per replayed position.
///
/// Columns are `turn, piece, color, x, y`, plus `icon` when the query asks
/// for it via `icons := 'true'`.
pub struct ChessGameVTab;

fn parse_icons_value(raw: &str) -> Result<bool, Box<dyn Error>> {
    let normalized = raw.trim();
    if normalized.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if normalized.eq_ignore_ascii_case("false") || normalized.eq_ignore_ascii_case("null") {
        Ok(false)
    } else {
        Err(format!(
            "Invalid icons value '{}'. Supported values: 'true', 'false' or NULL/omitted.",
            normalized
        )
        .into())
    }
}

fn resolve_icons_flag(bind: &BindInfo) -> Result<bool, Box<dyn Error>> {
    match get_named_parameter_varchar(bind, "icons")? {
        NamedParameterVarchar::Missing | NamedParameterVarchar::Null => Ok(false),
        NamedParameterVarchar::Value(raw) => parse_icons_value(&raw),
    }
}

impl VTab for ChessGameVTab {
    type InitData = ChessGameInitData;
    type BindData = ChessGameBindData;

    fn bind(bind: &BindInfo) -> Result<Self::BindData, Box<dyn Error>> {
        let moves = bind.get_parameter(MOVES_PARAM_INDEX).to_string();
        let icons = resolve_icons_flag(bind)?;

        // The whole table materializes here, so an illegal move or malformed
        // encoding fails the query before a single row is produced.
        let rows = game_table(&moves)?;
        if icons {
            for row in &rows {
                piece_icon(row.piece)?;
            }
        }

        bind.add_result_column("turn", LogicalTypeHandle::from(LogicalTypeId::UInteger));
        bind.add_result_column("piece", LogicalTypeHandle::from(LogicalTypeId::Varchar));
        bind.add_result_column("color", LogicalTypeHandle::from(LogicalTypeId::Varchar));
        bind.add_result_column("x", LogicalTypeHandle::from(LogicalTypeId::UInteger));
        bind.add_result_column("y", LogicalTypeHandle::from(LogicalTypeId::UInteger));
        if icons {
            bind.add_result_column("icon", LogicalTypeHandle::from(LogicalTypeId::Varchar));
        }

        Ok(ChessGameBindData { rows, icons })
    }

    fn init(_: &InitInfo) -> Result<Self::InitData, Box<dyn Error>> {
        Ok(ChessGameInitData {
            next_row: Mutex::new(0),
        })
    }

    fn func(
        func: &TableFunctionInfo<Self>,
        output: &mut DataChunkHandle,
    ) -> Result<(), Box<dyn Error>> {
        let init_data = func.get_init_data();
        let bind_data = func.get_bind_data();

        // Claim the next chunk of rows; DuckDB may drive this from several
        // threads, so the cursor lives behind a mutex.
        let (start, end) = {
            let mut next_row = init_data.next_row.lock().unwrap();
            let start = *next_row;
            let end = (start + ROWS_PER_CHUNK).min(bind_data.rows.len());
            *next_row = end;
            (start, end)
        };
        let chunk = &bind_data.rows[start..end];

        let mut turn_vec = output.flat_vector(0);
        let piece_vec = output.flat_vector(1);
        let color_vec = output.flat_vector(2);
        let mut x_vec = output.flat_vector(3);
        let mut y_vec = output.flat_vector(4);

        let turn_slice = turn_vec.as_mut_slice::<u32>();
        let x_slice = x_vec.as_mut_slice::<u32>();
        let y_slice = y_vec.as_mut_slice::<u32>();

        for (i, row) in chunk.iter().enumerate() {
            turn_slice[i] = row.turn.unwrap_or_default();
            piece_vec.insert(i, CString::new(row.piece.to_string())?);
            color_vec.insert(i, CString::new(row.color.as_str())?);
            x_slice[i] = row.x;
            y_slice[i] = row.y;
        }

        if bind_data.icons {
            let icon_vec = output.flat_vector(5);
            for (i, row) in chunk.iter().enumerate() {
                icon_vec.insert(i, CString::new(piece_icon(row.piece)?)?);
            }
        }

        output.set_len(chunk.len());
        Ok(())
    }

    fn parameters() -> Option<Vec<LogicalTypeHandle>> {
        Some(vec![
            LogicalTypeHandle::from(LogicalTypeId::Varchar), // SAN moves (required)
        ])
    }

    fn named_parameters() -> Option<Vec<(String, LogicalTypeHandle)>> {
        Some(vec![(
            "icons".to_string(),
            LogicalTypeHandle::from(LogicalTypeId::Varchar),
        )])
    }
}
