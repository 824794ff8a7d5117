//! Este modulo define los generadores de fixtures aleatorios para el servicio
//! de inventario: articulos, productos y los archivos que los contienen

pub mod articulos_gen;
pub mod fixtures;
pub mod generador;
pub mod nombres;
pub mod productos_gen;
