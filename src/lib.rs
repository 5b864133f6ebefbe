pub mod data;
pub mod error;
pub mod parser;
pub mod solver;
pub mod timing;
