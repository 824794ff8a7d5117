//! Este modulo contiene la estructura que recibe los argumentos del programa
//! generador y ejecuta la generacion, mostrando por pantalla lo que escribio

use clap::Parser;
use colored::Colorize;

use super::fixtures::{self, ArchivosGenerados};
use crate::aliases::CantidadFixtures;
use crate::errores::Error;
use crate::CANTIDAD_POR_DEFECTO;

/// Genera los archivos `articles.json` y `products.json` en el directorio actual,
/// con la cantidad de articulos y productos indicada
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Generador {
    /// Cantidad de articulos y de productos a generar
    #[arg(default_value_t = CANTIDAD_POR_DEFECTO)]
    cantidad: CantidadFixtures,
}

impl Generador {
    /// Obtiene la cantidad de fixtures que se van a generar
    pub fn get_cantidad(&self) -> CantidadFixtures {
        self.cantidad
    }

    /// Ejecuta la generacion, imprimiendo por pantalla los archivos escritos
    /// # Errors
    /// * `Error::ErrorDeGeneracion` si no se pudo serializar o escribir alguno de los archivos
    pub fn ejecutar(&self) -> Result<ArchivosGenerados, Error> {
        let cantidad = self.cantidad.to_string();
        println!("Generando fixtures con cantidad {}", cantidad.blue());

        let archivos = fixtures::generar(self.cantidad)?;

        println!(
            "Se escribieron {} articulos en {}",
            cantidad.blue(),
            archivos.articulos.display()
        );
        println!(
            "Se escribieron {} productos en {}",
            cantidad.blue(),
            archivos.productos.display()
        );
        Ok(archivos)
    }
}
