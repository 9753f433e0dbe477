pub mod build_info;
pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod grid;
pub mod image;
pub mod initial_conditions;
pub mod solver;
pub mod spectrum;
pub mod stability;
pub mod stencil;
pub mod util;
