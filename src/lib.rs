use std::ops::RangeInclusive;

use aliases::{CantidadFixtures, CantidadStock, CodigoBarras};

pub mod aliases;
pub mod articulo;
pub mod errores;
pub mod generadores;
pub mod producto;

/// Nombre del archivo en el que se escribe el inventario de articulos
pub const ARCHIVO_ARTICULOS: &str = "articles.json";

/// Nombre del archivo en el que se escriben los productos
pub const ARCHIVO_PRODUCTOS: &str = "products.json";

/// Cantidad de articulos y productos a generar si no se indica otra
pub const CANTIDAD_POR_DEFECTO: CantidadFixtures = 5;

/// Cota superior (exclusiva) del stock de un articulo
pub const STOCK_MAXIMO: CantidadStock = 500;

/// Rango de los codigos de barras, todos de 9 digitos
pub const RANGO_CODIGO_BARRAS: RangeInclusive<CodigoBarras> = 100_000_000..=999_999_999;

/// Rango de la cantidad de articulos que componen un producto
pub const ARTICULOS_POR_PRODUCTO: RangeInclusive<CantidadFixtures> = 1..=2;
