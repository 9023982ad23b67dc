/// Returns the area of a simple polygon using the shoelace formula.
///
/// `vertices` is an ordered ring; the last vertex connects back to the first,
/// so the ring does not need to be closed explicitly (a repeated closing
/// vertex does not change the result). The area is unsigned, so clockwise and
/// counterclockwise rings agree. Fewer than three vertices enclose no area.
#[must_use]
pub fn polygon_area(vertices: &[[f64; 2]]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let next = vertices.iter().cycle().skip(1);
    let twice_signed: f64 = vertices
        .iter()
        .zip(next)
        .map(|(a, b)| a[0] * b[1] - b[0] * a[1])
        .sum();

    twice_signed.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn square_area() {
        let square = [[-1.0, -1.0], [-1.0, 1.0], [1.0, 1.0], [1.0, -1.0]];
        assert_relative_eq!(polygon_area(&square), 4.0);
    }

    #[test]
    fn winding_does_not_matter() {
        let mut square = [[-1.0, -1.0], [-1.0, 1.0], [1.0, 1.0], [1.0, -1.0]];
        square.reverse();
        assert_relative_eq!(polygon_area(&square), 4.0);
    }

    #[test]
    fn collinear_vertex_does_not_change_area() {
        let ring = [[-1.0, -1.0], [-1.0, 0.0], [-1.0, 1.0], [1.0, 1.0], [1.0, -1.0]];
        assert_relative_eq!(polygon_area(&ring), 4.0);
    }

    #[test]
    fn explicitly_closed_ring() {
        let triangle = [[0.0, 0.0], [4.0, 0.0], [0.0, 3.0], [0.0, 0.0]];
        assert_relative_eq!(polygon_area(&triangle), 6.0);
    }

    #[test]
    fn concave_polygon() {
        // A 2x2 square with a 1x1 notch removed from one corner.
        let notched = [[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [1.0, 2.0], [0.0, 2.0]];
        assert_relative_eq!(polygon_area(&notched), 3.0);
    }

    #[test]
    fn degenerate_rings_have_no_area() {
        assert_relative_eq!(polygon_area(&[]), 0.0);
        assert_relative_eq!(polygon_area(&[[1.0, 2.0]]), 0.0);
        assert_relative_eq!(polygon_area(&[[0.0, 0.0], [3.0, 4.0]]), 0.0);
    }
}
