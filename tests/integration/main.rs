//! Integration tests for tapedeck

mod helpers;

mod cli_test;
mod session_test;
