#[cfg(feature = "wavefront")]
use crate::math::Real;

/// Splits a Wavefront line into its whitespace-separated tokens.
///
/// Whitespace follows C `isspace`: the ASCII whitespace characters plus the vertical tab.
pub(crate) fn obj_tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|c| c.is_ascii_whitespace() || *c == 0x0B)
        .filter(|token| !token.is_empty())
}

/// Reads the coordinates of a vertex line (`v x y z ...`) at full precision.
///
/// Returns `None` if the line is not a vertex line or its first three coordinates are not numbers.
#[cfg(feature = "wavefront")]
pub(crate) fn parse_vertex_line(line: &[u8]) -> Option<[Real; 3]> {
    let mut tokens = obj_tokens(line);
    if tokens.next()? != b"v" {
        return None;
    }

    let mut coords = [0.0; 3];
    for coord in &mut coords {
        *coord = std::str::from_utf8(tokens.next()?).ok()?.parse().ok()?;
    }
    Some(coords)
}
