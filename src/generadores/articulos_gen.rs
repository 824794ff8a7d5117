//! Este modulo permite generar listas de articulos aleatorios. Los ids son
//! secuenciales empezando en 1, mientras que el nombre y el stock se eligen
//! al azar.

use rand::Rng;

use super::nombres;
use crate::aliases::CantidadFixtures;
use crate::articulo::Articulo;
use crate::STOCK_MAXIMO;

/// Genera un vector de `cantidad` articulos usando el generador dado
pub fn generar_articulos_con_rng<R: Rng + ?Sized>(
    rng: &mut R,
    cantidad: CantidadFixtures,
) -> Vec<Articulo> {
    (0..cantidad)
        .map(|i| {
            let nombre = nombres::nombre_articulo(rng);
            let stock = rng.gen_range(0..STOCK_MAXIMO);
            Articulo::new(i + 1, nombre, stock)
        })
        .collect()
}

/// Genera un vector de `cantidad` articulos aleatorios
pub fn generar_articulos(cantidad: CantidadFixtures) -> Vec<Articulo> {
    generar_articulos_con_rng(&mut rand::thread_rng(), cantidad)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn genera_la_cantidad_pedida_con_ids_en_orden() {
        for cantidad in [0, 1, 3, 50] {
            let articulos = generar_articulos(cantidad);
            assert_eq!(articulos.len(), cantidad);

            for (i, articulo) in articulos.iter().enumerate() {
                assert_eq!(articulo.get_id(), (i + 1).to_string());
            }
        }
    }

    #[test]
    fn stock_dentro_del_rango() {
        for articulo in generar_articulos(500) {
            let stock: u16 = articulo.get_stock().parse().unwrap();
            assert!(stock < 500);
        }
    }

    #[test]
    fn cero_articulos_es_vacio() {
        assert!(generar_articulos(0).is_empty());
    }
}
