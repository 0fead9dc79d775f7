use super::error::GameTableError;

/// Display asset for one piece letter as it appears in the placement field.
///
/// The 12 paths are fixed and never checked for existence here. Lowercase
/// letters map to the `w`-prefixed assets, mirroring the color tags the
/// board decoder attaches.
pub fn piece_icon(piece: char) -> Result<&'static str, GameTableError> {
    match piece {
        'r' => Ok("icons/wr.svg"),
        'R' => Ok("icons/br.svg"),
        'n' => Ok("icons/wn.svg"),
        'N' => Ok("icons/bn.svg"),
        'b' => Ok("icons/wb.svg"),
        'B' => Ok("icons/bb.svg"),
        'q' => Ok("icons/wq.svg"),
        'Q' => Ok("icons/bq.svg"),
        'k' => Ok("icons/wk.svg"),
        'K' => Ok("icons/bk.svg"),
        'p' => Ok("icons/wp.svg"),
        'P' => Ok("icons/bp.svg"),
        other => Err(GameTableError::UnknownPiece(other)),
    }
}
