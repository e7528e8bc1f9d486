#![cfg(test)]

pub(crate) mod test_utils;
mod uom_tests;
mod resolver_tests;
mod identify_tests;
