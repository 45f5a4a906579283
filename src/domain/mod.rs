pub mod cliente;
pub mod direccion;
pub mod types;
