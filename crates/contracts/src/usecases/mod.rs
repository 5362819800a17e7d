pub mod common;
pub mod u101_analyze_repository;
