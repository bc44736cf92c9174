pub mod cli;
pub mod dto;
