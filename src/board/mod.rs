//! The pure SAN → piece-table pipeline. No DuckDB types cross into this
//! module; everything here is plain data in, plain data out.

pub mod error;
pub mod fen;
pub mod icons;
pub mod replay;
pub mod table;
