pub mod u101_analyze_repository;
