extern crate std;

use crate::plan::types::{PixelPoint, Polygon};

#[test]
fn test_closed_appends_first_vertex() {
    let ring = Polygon::closed(vec![
        PixelPoint::new(1, 1),
        PixelPoint::new(4, 1),
        PixelPoint::new(4, 3),
    ]).unwrap();

    std::assert_eq!(ring.len(), 4);
    std::assert_eq!(ring.vertices()[3], PixelPoint::new(1, 1));
    std::assert!(ring.is_closed());
}

#[test]
fn test_single_point_trace_is_still_a_ring() {
    let ring = Polygon::closed(vec![PixelPoint::new(7, 2)]).unwrap();
    std::assert_eq!(ring.vertices(), &[PixelPoint::new(7, 2), PixelPoint::new(7, 2)]);
    std::assert!(ring.is_closed());
}

#[test]
fn test_empty_trace_has_no_ring() {
    std::assert!(Polygon::closed(Vec::new()).is_none());
}

#[test]
fn test_pixel_point_display() {
    std::assert_eq!(PixelPoint::new(12, 34).to_string(), "(12, 34)");
}
