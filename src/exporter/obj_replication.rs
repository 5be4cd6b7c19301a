use super::format_float;
use crate::math::{HomogeneousMatrix, Point, Real};
use crate::utils::obj_tokens;
use std::io::{self, BufRead, Write};

/// Copies a Wavefront file from `reader` to `writer`, replacing the coordinates of every vertex
/// line (`v x y z`) with the next position of `positions`.
///
/// - `cursor` is the index of the next position to consume. It is advanced once per vertex line,
///   so it can be shared by several files replicated in sequence.
/// - Vertex lines with no position left (`cursor >= positions.len()`) are dropped.
/// - If `inverse` is set, every position is mapped through it before being written.
/// - Empty lines are dropped. Every other line is copied verbatim.
///
/// Coordinates are written with [`format_float`].
pub fn replicate_obj<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    positions: &[Point<Real>],
    cursor: &mut usize,
    inverse: Option<&HomogeneousMatrix<Real>>,
) -> io::Result<()> {
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        if line.last() == Some(&b'\n') {
            let _ = line.pop();
        }

        if line.is_empty() {
            continue;
        }

        if !is_vertex_line(&line) {
            writer.write_all(&line)?;
            writer.write_all(b"\n")?;
            continue;
        }

        if let Some(pt) = positions.get(*cursor) {
            let pt = match inverse {
                Some(inv) => inv.transform_point(pt),
                None => *pt,
            };
            writeln!(
                writer,
                "v {} {} {}",
                format_float(pt.x),
                format_float(pt.y),
                format_float(pt.z)
            )?;
        }

        *cursor += 1;
    }

    writer.flush()
}

fn is_vertex_line(line: &[u8]) -> bool {
    obj_tokens(line).next() == Some(b"v".as_slice())
}

#[cfg(test)]
mod test {
    use super::replicate_obj;
    use crate::math::{HomogeneousMatrix, Point, Vector};

    fn replicate(input: &str, positions: &[Point<f64>], cursor: &mut usize) -> String {
        let mut out = Vec::new();
        replicate_obj(input.as_bytes(), &mut out, positions, cursor, None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn vertex_lines_are_replaced() {
        let input = "# comment\nv 0 0 0\nvn 0 0 1\n\nv 1 1 1\nf 1 2 3\n";
        let positions = [Point::new(0.5, -1.0, 2.0), Point::new(1.0e-5, 3.0, 1.0 / 3.0)];
        let mut cursor = 0;

        assert_eq!(
            replicate(input, &positions, &mut cursor),
            "# comment\nv 0.5 -1 2\nvn 0 0 1\nv 1e-05 3 0.333333\nf 1 2 3\n"
        );
        assert_eq!(cursor, 2);
    }

    #[test]
    fn other_lines_are_copied_verbatim() {
        let input = "  v  9 9 9\nvt 0.25 0.5\n\tg  group name \r\nf 1/1 2/2 3/3";
        let mut cursor = 0;
        assert_eq!(
            replicate(input, &[Point::new(1.0, 2.0, 3.0)], &mut cursor),
            "v 1 2 3\nvt 0.25 0.5\n\tg  group name \r\nf 1/1 2/2 3/3\n"
        );
    }

    #[test]
    fn vertical_tab_is_leading_whitespace() {
        let mut cursor = 0;
        assert_eq!(
            replicate("\x0Bv 0 0 0\n", &[Point::new(1.0, 2.0, 3.0)], &mut cursor),
            "v 1 2 3\n"
        );
        assert_eq!(cursor, 1);
    }

    #[test]
    fn missing_positions_drop_vertex_lines() {
        let input = "v 0 0 0\nv 0 0 0\nv 0 0 0\nf 1 2 3\n";
        let mut cursor = 0;
        assert_eq!(
            replicate(input, &[Point::new(4.0, 5.0, 6.0)], &mut cursor),
            "v 4 5 6\nf 1 2 3\n"
        );
        assert_eq!(cursor, 3);
    }

    #[test]
    fn cursor_is_shared_between_files() {
        let positions = [
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
        ];
        let mut cursor = 0;
        assert_eq!(replicate("v 0 0 0\nv 0 0 0\n", &positions, &mut cursor), "v 1 0 0\nv 2 0 0\n");
        assert_eq!(replicate("v 0 0 0\n", &positions, &mut cursor), "v 3 0 0\n");
    }

    #[test]
    fn inverse_transform_is_applied() {
        let inverse = HomogeneousMatrix::new_translation(&Vector::new(-1.0, -2.0, -3.0));
        let mut out = Vec::new();
        let mut cursor = 0;
        replicate_obj(
            "v 0 0 0\n".as_bytes(),
            &mut out,
            &[Point::new(1.0, 2.0, 3.5)],
            &mut cursor,
            Some(&inverse),
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "v 0 0 0.5\n");
    }
}
