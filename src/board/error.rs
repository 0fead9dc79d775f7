use thiserror::Error;

/// Failure modes of the SAN → piece-table pipeline.
///
/// Every variant aborts the whole conversion; no partial table is ever
/// produced on error.
#[derive(Debug, Error)]
pub enum GameTableError {
    /// A token could not be applied as a legal move to the current position.
    #[error("illegal move '{san}' at ply {ply}: {reason}")]
    IllegalMove {
        san: String,
        ply: usize,
        reason: String,
    },

    /// An encoding string did not have the expected FEN shape.
    #[error("malformed FEN '{fen}': {reason}")]
    Format { fen: String, reason: String },

    /// A piece symbol outside the 12 recognized letters was asked for an icon.
    #[error("unrecognized piece symbol '{0}'")]
    UnknownPiece(char),
}
