//! I/O module tests.

mod handle_tests;
mod memory_tests;
mod std_io_tests;
