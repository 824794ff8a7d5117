//! Este modulo define la estructura de productos, que se venden y
//! estan compuestos por uno o mas articulos

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::aliases::CodigoBarras;
use crate::articulo::Articulo;

/// Un producto esta definido por su nombre, un codigo de barras y los
/// articulos que lo componen
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Producto {
    name: String,
    barcode: String,
    contain_articles: Vec<Articulo>,
}

impl Producto {
    /// Crea un nuevo producto con los parametros dados
    pub fn new(nombre: String, codigo: CodigoBarras, articulos: Vec<Articulo>) -> Self {
        Self {
            name: nombre,
            barcode: codigo.to_string(),
            contain_articles: articulos,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_barcode(&self) -> &str {
        &self.barcode
    }

    /// Obtiene los articulos que componen al producto, en orden
    pub fn get_articles(&self) -> &[Articulo] {
        &self.contain_articles
    }
}

/// Documento de productos, tal como se escribe en `products.json`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Catalogo {
    pub products: Vec<Producto>,
}

impl Catalogo {
    pub fn new(products: Vec<Producto>) -> Self {
        Self { products }
    }
}

/// Parsea un lector de bytes (en formato json) en un catalogo de productos.
/// Simplemente encapsula las funcionalidades de la libreria de json.
pub fn from_reader(reader: &mut dyn Read) -> serde_json::Result<Catalogo> {
    serde_json::from_reader(reader)
}
