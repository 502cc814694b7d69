mod fs_tests;
mod parse_tests;
