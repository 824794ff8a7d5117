//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion

use std::io;

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug)]
pub enum Error {
    ErrorDeGeneracion(ErrorGeneracion),
    ErrorDeParseo(ErrorDuranteParseo),
}

impl From<ErrorGeneracion> for Error {
    fn from(err: ErrorGeneracion) -> Self {
        Error::ErrorDeGeneracion(err)
    }
}

impl From<ErrorDuranteParseo> for Error {
    fn from(err: ErrorDuranteParseo) -> Self {
        Error::ErrorDeParseo(err)
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// al escribir los archivos de fixtures
#[derive(Debug)]
pub enum ErrorGeneracion {
    NoSePudoCrearArchivo,
    NoSePudoSerializar,
}

impl From<io::Error> for ErrorGeneracion {
    fn from(_err: io::Error) -> Self {
        ErrorGeneracion::NoSePudoCrearArchivo
    }
}

impl From<serde_json::Error> for ErrorGeneracion {
    fn from(_err: serde_json::Error) -> Self {
        ErrorGeneracion::NoSePudoSerializar
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// en el parseo de los archivos de articulos y de productos
#[derive(Debug)]
pub enum ErrorDuranteParseo {
    NoSePudoAbrirArchivo,
    FormatoArchivoInvalido,
}

impl From<io::Error> for ErrorDuranteParseo {
    fn from(_err: io::Error) -> Self {
        ErrorDuranteParseo::NoSePudoAbrirArchivo
    }
}

impl From<serde_json::Error> for ErrorDuranteParseo {
    fn from(_err: serde_json::Error) -> Self {
        ErrorDuranteParseo::FormatoArchivoInvalido
    }
}
