pub mod math_utils;

#[cfg(test)]
mod math_utils_tests;
