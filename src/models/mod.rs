pub mod cliente;
pub mod config;
pub mod direccion;
