pub mod config_ops;
pub mod find_ops;
