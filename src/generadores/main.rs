//! Crea los archivos `articles.json` y `products.json` en el directorio actual.
//! Recibe como unico argumento la cantidad de articulos y productos, que por
//! defecto es 5.

use almacen_fixtures::errores::Error;
use almacen_fixtures::generadores::generador::Generador;
use clap::Parser;

fn main() -> Result<(), Error> {
    let generador = Generador::parse();
    if let Err(error) = generador.ejecutar() {
        eprintln!("Error en la creacion de los fixtures: {:?}", error);
        return Err(error);
    }

    println!("Fixtures generados");
    Ok(())
}
