//! Map decoding functionality for converting serialized map data into
//! structured tile grids.

use std::cmp::Ordering;

use crate::constants::DEFAULT_TILE;
use crate::error::DecodeError;
use crate::map::grid::TileGrid;
use glam::UVec2;
use tracing::debug;

/// Decoder for converting comma-separated tile-index strings into [`TileGrid`]s.
pub struct MapDecoder;

impl MapDecoder {
    /// Parses a single serialized token into a tile-type index.
    ///
    /// Tokens are bare non-negative integers. No whitespace is tolerated and
    /// empty tokens (produced by doubled or trailing commas) are malformed;
    /// serialized map data is machine-formatted, so anything that is not a
    /// plain integer is treated as corruption rather than coerced.
    ///
    /// # Arguments
    ///
    /// * `index` - The token's position in the sequence, used for error context
    /// * `token` - The raw token text
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedToken`] if the token is not a string of
    /// ASCII digits, or does not fit a `u32`.
    pub fn parse_token(index: usize, token: &str) -> Result<u32, DecodeError> {
        let malformed = || DecodeError::MalformedToken {
            index,
            token: token.to_string(),
        };

        // u32 parsing tolerates a leading `+`; token bytes must be digits
        // only. The parse still rejects values past u32::MAX.
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        token.parse::<u32>().map_err(|_| malformed())
    }

    /// Decodes a serialized map string into a `width * height` tile grid.
    ///
    /// The string is split on `,` and every token is parsed before any cell is
    /// filled, so a malformed token anywhere in the sequence (even past the
    /// declared grid size) aborts the decode with no partial grid.
    ///
    /// The token count is allowed to disagree with the declared dimensions:
    /// a short sequence pads the remaining cells with [`DEFAULT_TILE`], and a
    /// long one has its excess ignored. Both are deliberate tolerance for
    /// hand-maintained map data and are reported at debug level only.
    ///
    /// # Arguments
    ///
    /// * `raw` - The serialized map: comma-separated non-negative integers
    /// * `size` - Declared grid dimensions (`x` = columns, `y` = rows)
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedToken`] for the first token that is not
    /// a string of ASCII digits fitting a `u32`.
    pub fn decode(raw: &str, size: UVec2) -> Result<TileGrid, DecodeError> {
        let tokens = raw
            .split(',')
            .enumerate()
            .map(|(index, token)| Self::parse_token(index, token))
            .collect::<Result<Vec<u32>, DecodeError>>()?;

        let expected = (size.x as usize) * (size.y as usize);
        let mut cells = tokens;
        match cells.len().cmp(&expected) {
            Ordering::Less => {
                debug!(
                    "Serialized map holds {} tokens for {expected} cells, padding with tile {DEFAULT_TILE}",
                    cells.len()
                );
                cells.resize(expected, DEFAULT_TILE);
            }
            Ordering::Greater => {
                debug!(
                    "Serialized map holds {} tokens for {expected} cells, ignoring the excess",
                    cells.len()
                );
                cells.truncate(expected);
            }
            Ordering::Equal => {}
        }

        Ok(TileGrid::from_cells(size, cells))
    }
}
