use autd3_driver::{
    core::{common::Hz, modulation::SamplingConfig},
    firmware::{
        cpu::{laps, Command, ControlFlags, TxDatagram, LAP_TAG_MASK, SEQ_CALIB_DONE_TAG},
        operation::{self, pack_header},
        ProtocolGeneration,
    },
};
use autd3_firmware_emulator::CPUEmulator;
use itertools::Itertools;

use crate::create_geometry;

#[test]
fn send_init_ref_clock() -> anyhow::Result<()> {
    let geometry = create_geometry(1);
    let mut cpu = CPUEmulator::new(0, geometry[0].num_transducers(), ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);
    assert!(!cpu.fpga().is_clk_synced());

    let shifts = operation::synchronize::shifts(&SamplingConfig::new(2000 * Hz, 4000))?;
    pack_header(
        &mut tx,
        Command::InitRefClock.code(),
        Command::InitRefClock,
        ControlFlags::empty(),
    );
    operation::synchronize::pack(shifts, &geometry, &mut tx);
    cpu.send(&tx);

    assert_eq!(Command::InitRefClock.code(), cpu.rx().ack());
    assert!(cpu.fpga().is_clk_synced());
    assert_eq!(shifts.0, cpu.fpga().mod_idx_shift());
    assert_eq!(shifts.1, cpu.fpga().ref_clk_cycle_shift());
    Ok(())
}

#[test]
fn send_calib_seq_clock() {
    let geometry = create_geometry(3);
    let mut cpus = geometry
        .iter()
        .map(|dev| CPUEmulator::new(dev.idx(), dev.num_transducers(), ProtocolGeneration::Combined))
        .collect_vec();
    [10, 990, 20]
        .iter()
        .zip(cpus.iter_mut())
        .for_each(|(&lap, cpu)| cpu.set_lap(lap));

    let offsets = operation::clock::compute_offsets(&cpus.iter().map(|c| c.lap()).collect_vec());
    let mut tx = TxDatagram::new(3);
    pack_header(
        &mut tx,
        Command::CalibSeqClock.code(),
        Command::CalibSeqClock,
        ControlFlags::empty(),
    );
    operation::clock::pack(&offsets, &mut tx);
    cpus.iter_mut().for_each(|cpu| cpu.send(&tx));

    let rx = cpus.iter().map(|c| c.rx()).collect_vec();
    assert!(rx
        .iter()
        .all(|r| r.ack() & LAP_TAG_MASK == SEQ_CALIB_DONE_TAG));
    assert_eq!(vec![990, 990, 990], laps(&rx).collect_vec());
    assert_eq!(
        offsets,
        cpus.iter().map(|c| c.fpga().seq_clk_offset()).collect_vec()
    );
}

#[test]
fn calib_not_supported_in_split() {
    let geometry = create_geometry(1);
    let mut cpu = CPUEmulator::new(0, geometry[0].num_transducers(), ProtocolGeneration::Split);
    cpu.set_lap(10);
    let mut tx = TxDatagram::new(1);

    pack_header(&mut tx, 0x08, Command::CalibSeqClock, ControlFlags::empty());
    operation::clock::pack(&[20], &mut tx);
    cpu.send(&tx);

    assert_eq!(0x08, cpu.rx().ack());
    assert_eq!(10, cpu.lap());
}
