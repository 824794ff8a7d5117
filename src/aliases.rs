//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type IdArticulo = usize;
pub type CantidadStock = u16;
pub type CodigoBarras = u32;
pub type CantidadFixtures = usize;
