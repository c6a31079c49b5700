//! Integration tests for timesel

mod helpers;

mod config_test;
mod replay_test;
mod select_test;
