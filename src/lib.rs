//! Recycle Me CLI
//!
//! Webビューと同じ状態管理を使ってローカル画像を解析する

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;
