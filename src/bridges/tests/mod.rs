#![cfg(test)]

mod test_utils;
mod proj4_tests;
mod proj4_export_tests;
mod gml_tests;
