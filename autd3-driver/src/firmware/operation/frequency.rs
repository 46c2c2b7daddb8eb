use autd3_core::geometry::Geometry;

use crate::firmware::cpu::TxDatagram;

/// Writes the clock divisor of each device into body word 0.
pub fn pack(geometry: &Geometry, tx: &mut TxDatagram) {
    geometry.iter().for_each(|dev| {
        tx.body_mut(dev.idx()).data_mut()[0] = dev.cycle();
    });
    tx.set_bodies_enabled(true);
}

#[cfg(test)]
mod tests {
    use autd3_core::{devices::AUTD3, geometry::Geometry};

    use super::*;

    #[test]
    fn body() {
        let geometry = Geometry::new(vec![
            AUTD3::default().into(),
            AUTD3 {
                cycle: 4000,
                ..AUTD3::default()
            }
            .into(),
        ]);
        let mut tx = TxDatagram::new(2);
        pack(&geometry, &mut tx);
        assert_eq!(2, tx.num_bodies());
        assert_eq!(5000, tx.body(0).data()[0]);
        assert_eq!(4000, tx.body(1).data()[0]);
    }
}
