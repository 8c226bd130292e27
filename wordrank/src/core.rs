// src/core.rs
pub mod count;
pub mod filter;
pub mod ignore;
pub mod learn;
pub mod tokenize;
