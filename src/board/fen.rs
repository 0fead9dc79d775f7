use smallvec::SmallVec;

use super::error::GameTableError;

pub const FEN_FIELD_COUNT: usize = 6;

/// The six raw FEN fields, split but otherwise unparsed.
///
/// Joining the fields back with single spaces reproduces the input string
/// exactly; castling and en-passant stay opaque at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenFields {
    pub placement: String,
    pub active_color: String,
    pub castling: String,
    pub en_passant: String,
    pub halfmove_clock: String,
    pub fullmove_number: String,
}

/// Color tag attached to each decoded piece.
///
/// Lowercase placement letters tag as `w` and everything else as `b`,
/// matching the icon set, whose `w`-prefixed assets are keyed by the
/// lowercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    W,
    B,
}

impl ColorTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W => "w",
            Self::B => "b",
        }
    }
}

/// One occupied square. `x` is the 1-based rank-string index (top rank of
/// the placement field first), `y` the 1-based file. `turn` is stamped by
/// the game table builder and left unset by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceRow {
    pub turn: Option<u32>,
    pub piece: char,
    pub color: ColorTag,
    pub x: u32,
    pub y: u32,
}

/// Rows decoded from a single position. Real positions hold at most 32
/// pieces, so this stays inline.
pub type PositionRows = SmallVec<[PieceRow; 32]>;

pub fn split_fen(fen: &str) -> Result<FenFields, GameTableError> {
    let mut fields = fen.split(' ');
    let mut next = |name: &str| {
        fields.next().map(str::to_string).ok_or_else(|| GameTableError::Format {
            fen: fen.to_string(),
            reason: format!("missing {} field", name),
        })
    };

    let parsed = FenFields {
        placement: next("placement")?,
        active_color: next("active color")?,
        castling: next("castling")?,
        en_passant: next("en passant")?,
        halfmove_clock: next("halfmove clock")?,
        fullmove_number: next("fullmove number")?,
    };

    if fields.next().is_some() {
        return Err(GameTableError::Format {
            fen: fen.to_string(),
            reason: format!("expected exactly {} space-separated fields", FEN_FIELD_COUNT),
        });
    }

    Ok(parsed)
}

/// Decode the placement field of one FEN into a row per occupied square.
///
/// Digits advance the file counter by their value without emitting a row.
/// Any other character emits a row and advances the counter by one;
/// characters outside the standard piece letters pass through untouched,
/// and it is the icon annotator that rejects them.
pub fn decode_placement(fen: &str) -> Result<PositionRows, GameTableError> {
    let fields = split_fen(fen)?;
    let mut rows = PositionRows::new();

    for (rank_idx, rank) in fields.placement.split('/').enumerate() {
        let mut file: u32 = 1;
        for ch in rank.chars() {
            if let Some(run) = ch.to_digit(10) {
                file += run;
                continue;
            }

            rows.push(PieceRow {
                turn: None,
                piece: ch,
                color: if ch.is_lowercase() {
                    ColorTag::W
                } else {
                    ColorTag::B
                },
                x: rank_idx as u32 + 1,
                y: file,
            });
            file += 1;
        }
    }

    Ok(rows)
}
