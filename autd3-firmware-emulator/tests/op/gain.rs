use autd3_driver::{
    core::gain::Drive,
    firmware::{
        cpu::{Command, ControlFlags, TxDatagram},
        operation::{self, pack_header},
        ProtocolGeneration,
    },
};
use itertools::Itertools;
use rand::Rng;

use crate::{create_cpu, create_geometry};

#[test]
fn send_combined() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);

    let mut rng = rand::rng();
    let cycle = geometry[0].cycle();
    let drives = vec![(0..geometry[0].num_transducers())
        .map(|_| Drive::new(rng.random_range(0..=cycle / 2), rng.random_range(0..cycle)))
        .collect_vec()];

    pack_header(&mut tx, 0x20, Command::Op, ControlFlags::SILENT);
    operation::gain::pack_combined(&drives, &geometry, &mut tx);
    cpu.send(&tx);

    assert_eq!(0x20, cpu.rx().ack());
    assert_eq!(ControlFlags::SILENT, cpu.fpga().ctrl_flags());
    cpu.fpga()
        .drives()
        .into_iter()
        .zip(drives[0].iter())
        .for_each(|((duty, phase), &d)| {
            let word = operation::gain::encode_combined(d, cycle);
            assert_eq!((word >> 8) as u8, duty);
            assert_eq!((word & 0xFF) as u8, phase);
        });
}

#[test]
fn send_split() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Split);
    let mut tx = TxDatagram::new(1);

    let mut rng = rand::rng();
    let drives = vec![(0..geometry[0].num_transducers())
        .map(|_| Drive::new(rng.random_range(0..2500), rng.random_range(0..5000)))
        .collect_vec()];

    pack_header(&mut tx, 0x01, Command::WriteDuty, ControlFlags::SILENT);
    operation::gain::pack_duty(&drives, &mut tx);
    cpu.send(&tx);
    assert_eq!(0x01, cpu.rx().ack());

    pack_header(&mut tx, 0x02, Command::WritePhase, ControlFlags::SILENT);
    operation::gain::pack_phase(&drives, &mut tx);
    cpu.send(&tx);
    assert_eq!(0x02, cpu.rx().ack());

    assert_eq!(
        drives[0].iter().map(|d| d.duty()).collect_vec(),
        cpu.fpga().duties()
    );
    assert_eq!(
        drives[0].iter().map(|d| d.phase()).collect_vec(),
        cpu.fpga().phases()
    );
}

#[rstest::rstest]
#[case(ProtocolGeneration::Combined, Command::WriteDuty)]
#[case(ProtocolGeneration::Combined, Command::WritePhase)]
#[case(ProtocolGeneration::Split, Command::Op)]
fn not_supported(#[case] generation: ProtocolGeneration, #[case] command: Command) {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, generation);
    let mut tx = TxDatagram::new(1);

    pack_header(&mut tx, 0x21, command, ControlFlags::FORCE_FAN);
    tx.body_mut(0).data_mut().fill(0xFFFF);
    tx.set_bodies_enabled(true);
    cpu.send(&tx);

    assert_eq!(0x21, cpu.rx().ack());
    assert_eq!(ControlFlags::SILENT, cpu.fpga().ctrl_flags());
    assert!(cpu.fpga().duties().iter().all(|&d| d == 0));
    assert!(cpu.fpga().phases().iter().all(|&d| d == 0));
}
