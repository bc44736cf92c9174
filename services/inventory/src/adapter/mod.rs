pub mod backend;
pub mod datasource;
