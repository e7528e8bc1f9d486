#![cfg(test)]

mod model_tests;
mod norm_tests;
mod compare_tests;
