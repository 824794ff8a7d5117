//! Este modulo define la estructura de articulos, las piezas de inventario
//! que se cargan en el almacen y de las que se componen los productos

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::aliases::{CantidadStock, IdArticulo};

/// Un articulo esta definido por su id, un nombre y el stock disponible.
/// Todos los campos se serializan como texto, que es el formato que espera
/// el servicio de inventario al importarlos
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Articulo {
    art_id: String,
    name: String,
    stock: String,
}

impl Articulo {
    /// Crea un nuevo articulo con los parametros dados
    pub fn new(id: IdArticulo, nombre: String, stock: CantidadStock) -> Self {
        Self {
            art_id: id.to_string(),
            name: nombre,
            stock: stock.to_string(),
        }
    }

    /// Obtiene el ID del articulo
    pub fn get_id(&self) -> &str {
        &self.art_id
    }

    /// Obtiene el nombre del articulo
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Obtiene el stock del articulo, tal como se escribe en el archivo
    pub fn get_stock(&self) -> &str {
        &self.stock
    }
}

/// Documento de inventario, tal como se escribe en `articles.json`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Inventario {
    pub inventory: Vec<Articulo>,
}

impl Inventario {
    pub fn new(inventory: Vec<Articulo>) -> Self {
        Self { inventory }
    }
}

/// Parsea un lector de bytes (en formato json) en un inventario. Simplemente
/// encapsula las funcionalidades de la libreria de json.
pub fn from_reader(reader: &mut dyn Read) -> serde_json::Result<Inventario> {
    serde_json::from_reader(reader)
}
