//! Advisory structural check of a FEN string.
//!
//! A failure marks the specific entry invalid in the editor; it never blocks
//! editing other entries or submitting the rest of the form. The rendering
//! service performs the authoritative validation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} contains invalid character '{piece}'")]
    InvalidPiece { rank: usize, piece: char },

    #[error("rank {rank} covers {files} files, expected 8")]
    RankWidth { rank: usize, files: u32 },

    #[error("invalid side to move '{0}', expected 'w' or 'b'")]
    SideToMove(String),

    #[error("invalid castling rights '{0}'")]
    CastlingRights(String),

    #[error("invalid en passant target '{0}'")]
    EnPassant(String),

    #[error("invalid halfmove clock '{0}'")]
    HalfmoveClock(String),

    #[error("invalid fullmove number '{0}'")]
    FullmoveNumber(String),
}

const PIECES: &str = "rnbqkpRNBQKP";

/// Check a candidate string against the structural FEN grammar.
pub fn validate_fen(fen: &str) -> Result<(), FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::FieldCount(fields.len()));
    }

    validate_placement(fields[0])?;
    validate_side(fields[1])?;
    validate_castling(fields[2])?;
    validate_en_passant(fields[3])?;

    if fields[4].parse::<u32>().is_err() {
        return Err(FenError::HalfmoveClock(fields[4].to_string()));
    }
    if fields[5].parse::<u32>().is_err() {
        return Err(FenError::FullmoveNumber(fields[5].to_string()));
    }

    Ok(())
}

fn validate_placement(placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (index, rank) in ranks.iter().enumerate() {
        let rank_number = index + 1;
        let mut files: u32 = 0;
        for c in rank.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPiece {
                        rank: rank_number,
                        piece: c,
                    });
                }
                files += run;
            } else if PIECES.contains(c) {
                files += 1;
            } else {
                return Err(FenError::InvalidPiece {
                    rank: rank_number,
                    piece: c,
                });
            }
        }
        if files != 8 {
            return Err(FenError::RankWidth {
                rank: rank_number,
                files,
            });
        }
    }

    Ok(())
}

fn validate_side(side: &str) -> Result<(), FenError> {
    match side {
        "w" | "b" => Ok(()),
        other => Err(FenError::SideToMove(other.to_string())),
    }
}

fn validate_castling(castling: &str) -> Result<(), FenError> {
    if castling == "-" {
        return Ok(());
    }
    if castling.is_empty() {
        return Err(FenError::CastlingRights(castling.to_string()));
    }
    // Must be a non-empty, in-order subset of "KQkq" without repeats.
    let mut order = "KQkq".chars();
    for c in castling.chars() {
        if !order.any(|expected| expected == c) {
            return Err(FenError::CastlingRights(castling.to_string()));
        }
    }
    Ok(())
}

fn validate_en_passant(target: &str) -> Result<(), FenError> {
    if target == "-" {
        return Ok(());
    }
    let mut chars = target.chars();
    let file = chars.next();
    let rank = chars.next();
    let rest = chars.next();
    match (file, rank, rest) {
        (Some(f), Some(r), None) if ('a'..='h').contains(&f) && (r == '3' || r == '6') => Ok(()),
        _ => Err(FenError::EnPassant(target.to_string())),
    }
}
