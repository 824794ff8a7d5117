//! Este modulo arma los dos archivos de fixtures: el inventario de articulos
//! y la lista de productos. Los archivos se generan en formato json y se
//! pisan si ya existian.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;

use super::{articulos_gen::generar_articulos, productos_gen::generar_productos};
use crate::aliases::CantidadFixtures;
use crate::articulo::{self, Inventario};
use crate::errores::{ErrorDuranteParseo, ErrorGeneracion};
use crate::producto::{self, Catalogo};
use crate::{ARCHIVO_ARTICULOS, ARCHIVO_PRODUCTOS};

/// Rutas de los archivos escritos en una generacion
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivosGenerados {
    pub articulos: PathBuf,
    pub productos: PathBuf,
}

/// Serializa un documento y lo escribe en la ruta dada, reemplazando
/// el contenido anterior
fn escribir_json<T: Serialize>(ruta: &Path, documento: &T) -> Result<(), ErrorGeneracion> {
    let json_data = serde_json::to_string_pretty(documento)?;
    let mut file = File::create(ruta)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}

/// Genera `cantidad` articulos y `cantidad` productos, y los escribe en
/// `articles.json` y `products.json` dentro del directorio dado. Primero
/// se escribe el inventario, y luego los productos.
pub fn generar_en(
    directorio: &Path,
    cantidad: CantidadFixtures,
) -> Result<ArchivosGenerados, ErrorGeneracion> {
    let archivos = ArchivosGenerados {
        articulos: directorio.join(ARCHIVO_ARTICULOS),
        productos: directorio.join(ARCHIVO_PRODUCTOS),
    };

    let inventario = Inventario::new(generar_articulos(cantidad));
    escribir_json(&archivos.articulos, &inventario)?;

    let catalogo = Catalogo::new(generar_productos(cantidad));
    escribir_json(&archivos.productos, &catalogo)?;

    Ok(archivos)
}

/// Genera los archivos de fixtures en el directorio actual
pub fn generar(cantidad: CantidadFixtures) -> Result<ArchivosGenerados, ErrorGeneracion> {
    generar_en(Path::new("."), cantidad)
}

/// Lee los archivos de una generacion previa, devolviendo el inventario
/// y los productos que contienen
/// # Errors
/// * `ErrorDuranteParseo::NoSePudoAbrirArchivo` si alguno de los archivos no existe
/// * `ErrorDuranteParseo::FormatoArchivoInvalido` si alguno no tiene el formato esperado
pub fn leer_fixtures(
    archivos: &ArchivosGenerados,
) -> Result<(Inventario, Catalogo), ErrorDuranteParseo> {
    let mut arch_articulos = File::open(&archivos.articulos)?;
    let inventario = articulo::from_reader(&mut arch_articulos)?;

    let mut arch_productos = File::open(&archivos.productos)?;
    let catalogo = producto::from_reader(&mut arch_productos)?;

    Ok((inventario, catalogo))
}
