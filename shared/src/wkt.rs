//! Restricted WKT codec for link path geometry.
//!
//! Only the `LINESTRING` shape is supported; points, polygons and
//! multi-part geometries are out of scope. Coordinates are kept in
//! longitude/latitude order as drawn.

/// Encodes an ordered coordinate sequence as `LINESTRING(x1 y1,x2 y2,...)`.
pub fn encode_linestring(coords: &[(f64, f64)]) -> String {
    let pairs = coords
        .iter()
        .map(|(x, y)| format!("{x} {y}"))
        .collect::<Vec<_>>()
        .join(",");
    format!("LINESTRING({pairs})")
}

/// Decodes LINESTRING text back into a coordinate sequence.
///
/// Text that does not start with `LINESTRING` yields `None` (no geometry,
/// not an error). Malformed numeric tokens become `f64::NAN` silently;
/// callers treat the geometry as opaque and never depend on its values
/// being finite.
pub fn decode_linestring(text: &str) -> Option<Vec<(f64, f64)>> {
    if !text.starts_with("LINESTRING") {
        return None;
    }

    let inner = text
        .trim_start_matches("LINESTRING")
        .trim_start_matches('(')
        .trim_end_matches(')');

    let coords = inner
        .split(',')
        .map(|pair| {
            let mut components = pair.trim().split(' ');
            let x = components.next().map_or(f64::NAN, parse_component);
            let y = components.next().map_or(f64::NAN, parse_component);
            (x, y)
        })
        .collect();

    Some(coords)
}

fn parse_component(token: &str) -> f64 {
    token.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_coordinate_pairs() {
        let wkt = encode_linestring(&[(-47.93, -15.78), (-47.88, -15.75)]);
        assert_eq!(wkt, "LINESTRING(-47.93 -15.78,-47.88 -15.75)");
    }

    #[test]
    fn round_trips_well_formed_coordinates() {
        let coords = vec![(-47.9292, -15.7801), (-47.88, -15.75), (-47.5, -15.0)];
        let decoded = decode_linestring(&encode_linestring(&coords)).unwrap();
        assert_eq!(decoded, coords);
    }

    #[test]
    fn text_without_linestring_prefix_is_no_geometry() {
        assert_eq!(decode_linestring(""), None);
        assert_eq!(decode_linestring("POINT(1 2)"), None);
        assert_eq!(decode_linestring("linestring(1 2,3 4)"), None);
    }

    #[test]
    fn malformed_tokens_decode_to_nan_silently() {
        let decoded = decode_linestring("LINESTRING(abc 2,3 4)").unwrap();
        assert_eq!(decoded.len(), 2);
        assert!(decoded[0].0.is_nan());
        assert_eq!(decoded[0].1, 2.0);
        assert_eq!(decoded[1], (3.0, 4.0));
    }

    #[test]
    fn missing_components_decode_to_nan() {
        let decoded = decode_linestring("LINESTRING(1,2 3)").unwrap();
        assert_eq!(decoded[0].0, 1.0);
        assert!(decoded[0].1.is_nan());
    }
}
