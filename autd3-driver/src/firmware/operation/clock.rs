use itertools::Itertools;

use crate::firmware::cpu::{TxDatagram, LAP_MODULUS};

/// Computes the offset of each device's lap counter from the smallest one.
///
/// Counters that straddle the wraparound point are unwrapped first: if the spread exceeds half the modulus,
/// every lap below half the modulus is shifted up by one modulus.
#[must_use]
pub fn compute_offsets(laps: &[u16]) -> Vec<u16> {
    let half = LAP_MODULUS / 2;
    let laps = match laps.iter().minmax().into_option() {
        Some((&min, &max)) if max - min > half => laps
            .iter()
            .map(|&lap| if lap < half { lap + LAP_MODULUS } else { lap })
            .collect(),
        _ => laps.to_vec(),
    };
    let min = laps.iter().copied().min().unwrap_or(0);
    laps.iter().map(|&lap| lap - min).collect()
}

/// Writes the offset of each device into body word 0.
pub fn pack(offsets: &[u16], tx: &mut TxDatagram) {
    tx.bodies_mut()
        .iter_mut()
        .zip(offsets)
        .for_each(|(body, &offset)| body.data_mut()[0] = offset);
    tx.set_bodies_enabled(true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(vec![20, 0, 30], vec![10, 990, 20])]
    #[case(vec![0, 0, 0], vec![500, 500, 500])]
    #[case(vec![0, 10, 499], vec![1, 11, 500])]
    #[case(vec![0, 2], vec![999, 1])]
    #[case(vec![0], vec![123])]
    #[case(vec![], vec![])]
    fn offsets(#[case] expected: Vec<u16>, #[case] laps: Vec<u16>) {
        assert_eq!(expected, compute_offsets(&laps));
    }

    #[test]
    fn body() {
        let mut tx = TxDatagram::new(3);
        pack(&[20, 0, 30], &mut tx);
        assert_eq!(3, tx.num_bodies());
        assert_eq!(20, tx.body(0).data()[0]);
        assert_eq!(0, tx.body(1).data()[0]);
        assert_eq!(30, tx.body(2).data()[0]);
    }
}
