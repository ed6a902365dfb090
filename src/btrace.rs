//! Main module for btrace library functionality

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod processor;
