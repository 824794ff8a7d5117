//! Este modulo permite generar listas de productos aleatorios. Cada producto
//! se arma con uno o dos articulos nuevos, generados de forma independiente
//! al inventario.

use rand::Rng;

use super::{articulos_gen, nombres};
use crate::aliases::CantidadFixtures;
use crate::producto::Producto;
use crate::{ARTICULOS_POR_PRODUCTO, RANGO_CODIGO_BARRAS};

/// Genera un vector de `cantidad` productos usando el generador dado
pub fn generar_productos_con_rng<R: Rng + ?Sized>(
    rng: &mut R,
    cantidad: CantidadFixtures,
) -> Vec<Producto> {
    (0..cantidad)
        .map(|_| {
            let nombre = nombres::nombre_producto(rng);
            let codigo = rng.gen_range(RANGO_CODIGO_BARRAS);
            let cant_articulos = rng.gen_range(ARTICULOS_POR_PRODUCTO);
            let articulos = articulos_gen::generar_articulos_con_rng(rng, cant_articulos);
            Producto::new(nombre, codigo, articulos)
        })
        .collect()
}

/// Genera un vector de `cantidad` productos aleatorios
pub fn generar_productos(cantidad: CantidadFixtures) -> Vec<Producto> {
    generar_productos_con_rng(&mut rand::thread_rng(), cantidad)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn genera_la_cantidad_pedida() {
        for cantidad in [0, 1, 3, 50] {
            assert_eq!(generar_productos(cantidad).len(), cantidad);
        }
    }

    #[test]
    fn cada_producto_tiene_uno_o_dos_articulos() {
        for producto in generar_productos(300) {
            let articulos = producto.get_articles();
            assert!(articulos.len() == 1 || articulos.len() == 2);
            assert_eq!(articulos[0].get_id(), "1");
            if let Some(segundo) = articulos.get(1) {
                assert_eq!(segundo.get_id(), "2");
            }
        }
    }

    #[test]
    fn codigo_de_barras_de_nueve_digitos() {
        for producto in generar_productos(300) {
            assert_eq!(producto.get_barcode().len(), 9);
            let codigo: u32 = producto.get_barcode().parse().unwrap();
            assert!((100_000_000..=999_999_999).contains(&codigo));
        }
    }

    #[test]
    fn aparecen_ambas_cantidades_de_articulos() {
        let productos = generar_productos(300);
        assert!(productos.iter().any(|p| p.get_articles().len() == 1));
        assert!(productos.iter().any(|p| p.get_articles().len() == 2));
    }
}
