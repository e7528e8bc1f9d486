#![cfg(test)]

mod ordering_tests;
