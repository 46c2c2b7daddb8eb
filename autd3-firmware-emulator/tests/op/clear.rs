use autd3_driver::{
    core::common::DEFAULT_CYCLE,
    firmware::{
        cpu::{Command, ControlFlags, TxDatagram},
        operation::pack_header,
        ProtocolGeneration,
    },
};

use crate::{create_cpu, create_geometry};

#[rstest::rstest]
#[case(ProtocolGeneration::Combined)]
#[case(ProtocolGeneration::Split)]
fn send_clear(#[case] generation: ProtocolGeneration) {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, generation);
    let mut tx = TxDatagram::new(1);

    let command = match generation {
        ProtocolGeneration::Combined => Command::Op,
        ProtocolGeneration::Split => Command::WriteDuty,
    };
    pack_header(&mut tx, 0x30, command, ControlFlags::FORCE_FAN);
    tx.body_mut(0).data_mut().fill(0x0102);
    tx.set_bodies_enabled(true);
    cpu.send(&tx);
    assert!(cpu.fpga().duties().iter().all(|&d| d == 0x0102));

    pack_header(&mut tx, Command::Clear.code(), Command::Clear, ControlFlags::empty());
    cpu.send(&tx);

    assert_eq!(Command::Clear.code(), cpu.rx().ack());
    assert_eq!(ControlFlags::SILENT, cpu.fpga().ctrl_flags());
    assert!(cpu.fpga().duties().iter().all(|&d| d == 0));
    assert!(cpu.fpga().phases().iter().all(|&d| d == 0));
    assert_eq!(DEFAULT_CYCLE, cpu.fpga().ultrasound_cycle());
    assert_eq!(0, cpu.fpga().seq_size());
}

#[test]
fn clear_resets_modulation() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);

    pack_header(
        &mut tx,
        0x20,
        Command::Op,
        ControlFlags::MOD_BEGIN | ControlFlags::MOD_END,
    );
    tx.header_mut().payload[0] = 2;
    tx.header_mut().payload[1] = 0x00;
    tx.header_mut().payload[2] = 0x80;
    cpu.send(&tx);
    assert!(cpu.fpga().modulation().iter().any(|&m| m != 0xFF));

    pack_header(&mut tx, Command::Clear.code(), Command::Clear, ControlFlags::empty());
    cpu.send(&tx);
    assert!(cpu.fpga().modulation().iter().all(|&m| m == 0xFF));
}
