//! Error module tests.

mod error_tests;
