//! Este modulo contiene las listas de palabras con las que se arman los
//! nombres de articulos y productos. Un nombre es siempre un adjetivo
//! seguido de un sustantivo, separados por un espacio.

use rand::Rng;

pub const ADJETIVOS: [&str; 6] = ["top", "bottom", "side", "rear", "big", "small"];

pub const SUSTANTIVOS_ARTICULOS: [&str; 8] = [
    "screw",
    "seat",
    "leg",
    "screwdriver",
    "board",
    "chipboard",
    "door",
    "rail",
];

pub const SUSTANTIVOS_PRODUCTOS: [&str; 9] = [
    "chair", "towel", "wardrobe", "bed", "pillow", "table", "lamp", "mirror", "carpet",
];

/// Elige una palabra al azar de la lista dada
fn palabra_aleatoria<'a, R: Rng + ?Sized>(rng: &mut R, palabras: &[&'a str]) -> &'a str {
    palabras[rng.gen_range(0..palabras.len())]
}

/// Arma un nombre con un adjetivo y un sustantivo al azar de la lista dada
fn nombre_aleatorio<R: Rng + ?Sized>(rng: &mut R, sustantivos: &[&str]) -> String {
    let adjetivo = palabra_aleatoria(rng, &ADJETIVOS);
    let sustantivo = palabra_aleatoria(rng, sustantivos);
    format!("{} {}", adjetivo, sustantivo)
}

/// Genera un nombre de articulo al azar
pub fn nombre_articulo<R: Rng + ?Sized>(rng: &mut R) -> String {
    nombre_aleatorio(rng, &SUSTANTIVOS_ARTICULOS)
}

/// Genera un nombre de producto al azar
pub fn nombre_producto<R: Rng + ?Sized>(rng: &mut R) -> String {
    nombre_aleatorio(rng, &SUSTANTIVOS_PRODUCTOS)
}

#[cfg(test)]
mod test {
    use super::*;

    fn separar(nombre: &str) -> (String, String) {
        let (adjetivo, sustantivo) = nombre.split_once(' ').unwrap();
        (adjetivo.to_string(), sustantivo.to_string())
    }

    #[test]
    fn nombres_de_articulos_usan_sus_listas() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let (adjetivo, sustantivo) = separar(&nombre_articulo(&mut rng));
            assert!(ADJETIVOS.contains(&adjetivo.as_str()));
            assert!(SUSTANTIVOS_ARTICULOS.contains(&sustantivo.as_str()));
        }
    }

    #[test]
    fn nombres_de_productos_usan_sus_listas() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let (adjetivo, sustantivo) = separar(&nombre_producto(&mut rng));
            assert!(ADJETIVOS.contains(&adjetivo.as_str()));
            assert!(SUSTANTIVOS_PRODUCTOS.contains(&sustantivo.as_str()));
        }
    }
}
