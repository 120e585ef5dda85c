// The binary entry point is main.rs; the library target carries the module
// tree so the benchmarks and integration tests can drive it directly.

pub mod app;
pub mod config;
pub mod event;
pub mod generator;
pub mod session;
pub mod ui;
