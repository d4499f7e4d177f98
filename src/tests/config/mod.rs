//! Config module tests.

mod options_tests;
mod role_tests;
