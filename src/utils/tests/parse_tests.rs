//! Tests for the parsing helpers

extern crate std;

use crate::utils::parse_utils::{parse_tile_name, parse_triple};

#[test]
fn test_parse_plain_triple() {
    std::assert_eq!(parse_triple("120,210,230").unwrap(), [120, 210, 230]);
}

#[test]
fn test_parse_parenthesized_triple_with_spaces() {
    std::assert_eq!(parse_triple(" ( 180, 255 ,255 ) ").unwrap(), [180, 255, 255]);
}

#[test]
fn test_parse_triple_rejects_out_of_range() {
    std::assert!(parse_triple("120,256,0").is_err());
}

#[test]
fn test_parse_triple_rejects_wrong_arity() {
    std::assert!(parse_triple("1,2").is_err());
    std::assert!(parse_triple("1,2,3,4").is_err());
    std::assert!(parse_triple("red").is_err());
}

#[test]
fn test_parse_tile_name() {
    std::assert_eq!(parse_tile_name("tile_z3_x5_y7.png"), Some((3, 5, 7)));
    std::assert_eq!(parse_tile_name("tile_z10_x1023_y0.png"), Some((10, 1023, 0)));
}

#[test]
fn test_parse_tile_name_ignores_other_files() {
    std::assert_eq!(parse_tile_name("output.csv"), None);
    std::assert_eq!(parse_tile_name("tile_z1_x0_y0.jpg"), None);
    std::assert_eq!(parse_tile_name("old_tile_z1_x0_y0.png"), None);
}
