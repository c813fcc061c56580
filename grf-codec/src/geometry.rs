//! Decoding of compact direction geometry and `SHAPE` output.
//!
//! Direction geometry arrives in the compressed text form produced by the
//! routing service: a run of signed base-32 integers such as `+v8+v8+1ug`.
//! The first integer is the XY multiplier; the rest are X/Y deltas that
//! accumulate into coordinates. A newer variant starts with `+0+1`, followed
//! by a flags word and the multiplier, and appends Z and M sections after
//! `|` separators; only the XY part is decoded.
//!
//! Geometry is decorative in the exported document, so a string that fails
//! to decode yields an empty `SHAPE` instead of an error.

use geo::Coord;
use thiserror::Error;

use crate::error::WriteError;
use crate::format::format_coords;
use crate::vocabulary::{COORDS, PATH, POLYLINE, SHAPE};
use crate::writer::TreeWriter;

const RADIX: u32 = 32;
const SECTION_SEPARATOR: char = '|';
const HEADER_VERSION: i64 = 1;

/// Reasons a compressed geometry string cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryDecodeError {
    /// The string holds no integers.
    #[error("geometry string is empty")]
    Empty,
    /// A digit was expected after a sign, or a sign was expected.
    #[error("unexpected character {found:?} at byte {position}")]
    UnexpectedCharacter {
        /// Offending character.
        found: char,
        /// Byte offset within the XY section.
        position: usize,
    },
    /// A sign was not followed by any digit.
    #[error("sign without digits at byte {position}")]
    MissingDigits {
        /// Byte offset of the sign.
        position: usize,
    },
    /// An integer or accumulated coordinate does not fit in 64 bits.
    #[error("geometry value overflows")]
    Overflow,
    /// The header announces a format version this decoder does not know.
    #[error("unsupported compressed geometry version {0}")]
    UnsupportedVersion(i64),
    /// The XY multiplier is missing or not positive.
    #[error("invalid XY multiplier {0}")]
    InvalidMultiplier(i64),
    /// Deltas do not pair into whole coordinates, or there are none.
    #[error("expected X/Y delta pairs, found {0} values")]
    UnpairedDeltas(usize),
}

/// Decode a compressed geometry string into its coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use grf_codec::geometry::decode_compressed_geometry;
///
/// let points = decode_compressed_geometry("+v8+v8+1ug+fk+fk").expect("valid geometry");
/// assert_eq!(points, vec![Coord { x: 1.0, y: 2.0 }, Coord { x: 1.5, y: 2.5 }]);
/// ```
pub fn decode_compressed_geometry(encoded: &str) -> Result<Vec<Coord<f64>>, GeometryDecodeError> {
    let xy_section = encoded
        .split(SECTION_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim();
    let values = parse_integers(xy_section)?;
    let (multiplier, deltas) = split_header(&values)?;
    if deltas.is_empty() || !deltas.chunks_exact(2).remainder().is_empty() {
        return Err(GeometryDecodeError::UnpairedDeltas(deltas.len()));
    }
    accumulate(multiplier, deltas)
}

fn split_header(values: &[i64]) -> Result<(i64, &[i64]), GeometryDecodeError> {
    let (multiplier, rest) = match values {
        [] => return Err(GeometryDecodeError::Empty),
        [0, version, _flags, multiplier, rest @ ..] => {
            if *version != HEADER_VERSION {
                return Err(GeometryDecodeError::UnsupportedVersion(*version));
            }
            (*multiplier, rest)
        }
        [0, ..] => return Err(GeometryDecodeError::InvalidMultiplier(0)),
        [multiplier, rest @ ..] => (*multiplier, rest),
    };
    if multiplier <= 0 {
        return Err(GeometryDecodeError::InvalidMultiplier(multiplier));
    }
    Ok((multiplier, rest))
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "integer grid coordinates are scaled back to degrees"
)]
fn accumulate(multiplier: i64, deltas: &[i64]) -> Result<Vec<Coord<f64>>, GeometryDecodeError> {
    let scale = multiplier as f64;
    let mut x: i64 = 0;
    let mut y: i64 = 0;
    let pairs = deltas.chunks_exact(2);
    let mut points = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let [dx, dy] = pair else {
            return Err(GeometryDecodeError::UnpairedDeltas(deltas.len()));
        };
        x = x.checked_add(*dx).ok_or(GeometryDecodeError::Overflow)?;
        y = y.checked_add(*dy).ok_or(GeometryDecodeError::Overflow)?;
        points.push(Coord {
            x: x as f64 / scale,
            y: y as f64 / scale,
        });
    }
    Ok(points)
}

fn parse_integers(section: &str) -> Result<Vec<i64>, GeometryDecodeError> {
    let mut values = Vec::new();
    let mut chars = section.char_indices().peekable();
    while let Some((position, sign)) = chars.next() {
        let negative = match sign {
            '+' => false,
            '-' => true,
            found => return Err(GeometryDecodeError::UnexpectedCharacter { found, position }),
        };
        let mut magnitude: i64 = 0;
        let mut digits = 0_usize;
        while let Some(&(digit_position, ch)) = chars.peek() {
            if ch == '+' || ch == '-' {
                break;
            }
            let digit = ch
                .to_digit(RADIX)
                .filter(|_| !ch.is_ascii_uppercase())
                .ok_or(GeometryDecodeError::UnexpectedCharacter {
                    found: ch,
                    position: digit_position,
                })?;
            magnitude = magnitude
                .checked_mul(i64::from(RADIX))
                .and_then(|value| value.checked_add(i64::from(digit)))
                .ok_or(GeometryDecodeError::Overflow)?;
            digits += 1;
            chars.next();
        }
        if digits == 0 {
            return Err(GeometryDecodeError::MissingDigits { position });
        }
        values.push(if negative { -magnitude } else { magnitude });
    }
    Ok(values)
}

/// Write `SHAPE` for an encoded geometry, empty when it does not decode.
pub fn write_encoded_shape<T: TreeWriter>(writer: &mut T, encoded: &str) -> Result<(), WriteError> {
    match decode_compressed_geometry(encoded) {
        Ok(points) => write_path_shape(writer, &points),
        Err(err) => {
            log::debug!("writing empty shape for undecodable geometry: {err}");
            write_path_shape(writer, &[])
        }
    }
}

/// Write `SHAPE` → `POLYLINE` → `PATH` → `COORDS` for `points`.
///
/// An empty slice produces an empty `SHAPE`.
pub fn write_path_shape<T: TreeWriter>(
    writer: &mut T,
    points: &[Coord<f64>],
) -> Result<(), WriteError> {
    writer.start_element(SHAPE)?;
    if !points.is_empty() {
        writer.start_element(POLYLINE)?;
        writer.start_element(PATH)?;
        writer.text_element(COORDS, &format_coords(points))?;
        writer.end_element()?;
        writer.end_element()?;
    }
    writer.end_element()
}
