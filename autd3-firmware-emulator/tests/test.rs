use autd3_driver::{
    core::{devices::AUTD3, geometry::Geometry},
    firmware::{
        cpu::{Command, ControlFlags, TxDatagram},
        operation::pack_header,
        ProtocolGeneration,
    },
};
use autd3_firmware_emulator::CPUEmulator;

mod op;

pub fn create_geometry(n: usize) -> Geometry {
    Geometry::new((0..n).map(|_| AUTD3::default().into()).collect())
}

pub fn create_cpu(geometry: &Geometry, generation: ProtocolGeneration) -> CPUEmulator {
    CPUEmulator::new(0, geometry[0].num_transducers(), generation)
}

#[test]
fn ignore_same_msg_id() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);

    pack_header(&mut tx, 0x20, Command::Op, ControlFlags::empty());
    tx.body_mut(0).data_mut().fill(0x1234);
    tx.set_bodies_enabled(true);
    cpu.send(&tx);
    assert_eq!(0x20, cpu.rx().ack());
    assert_eq!(0x20, cpu.last_msg_id());

    pack_header(&mut tx, 0x20, Command::Op, ControlFlags::SILENT);
    tx.body_mut(0).data_mut().fill(0x5678);
    tx.set_bodies_enabled(true);
    cpu.send(&tx);
    assert!(cpu.fpga().duties().iter().all(|&d| d == 0x1234));
    assert_eq!(ControlFlags::empty(), cpu.fpga().ctrl_flags());

    pack_header(&mut tx, 0x21, Command::Op, ControlFlags::SILENT);
    tx.body_mut(0).data_mut().fill(0x5678);
    tx.set_bodies_enabled(true);
    cpu.send(&tx);
    assert!(cpu.fpga().duties().iter().all(|&d| d == 0x5678));
    assert_eq!(ControlFlags::SILENT, cpu.fpga().ctrl_flags());
    assert_eq!(0x21, cpu.rx().ack());
}

#[test]
fn unknown_command() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);

    tx.header_mut().msg_id = 0x22;
    tx.header_mut().command = 0xFF;
    tx.body_mut(0).data_mut().fill(0xFFFF);
    tx.set_bodies_enabled(true);
    cpu.send(&tx);

    assert_eq!(0x22, cpu.rx().ack());
    assert_eq!(0x00, cpu.rx().data());
    assert!(cpu.fpga().duties().iter().all(|&d| d == 0));
}

#[test]
fn header_only_op_keeps_drives() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);

    pack_header(&mut tx, 0x20, Command::Op, ControlFlags::empty());
    tx.body_mut(0).data_mut().fill(0xFF00);
    tx.set_bodies_enabled(true);
    cpu.send(&tx);

    pack_header(&mut tx, 0x21, Command::Op, ControlFlags::FORCE_FAN);
    cpu.send(&tx);

    assert!(cpu.fpga().duties().iter().all(|&d| d == 0xFF00));
    assert_eq!(ControlFlags::FORCE_FAN, cpu.fpga().ctrl_flags());
}

#[test]
fn body_of_device() {
    let geometry = create_geometry(3);
    let mut cpu = CPUEmulator::new(2, geometry[2].num_transducers(), ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(3);

    pack_header(&mut tx, 0x20, Command::Op, ControlFlags::empty());
    tx.bodies_mut()
        .iter_mut()
        .enumerate()
        .for_each(|(i, b)| b.data_mut().fill(i as u16 + 1));
    tx.set_bodies_enabled(true);
    cpu.send(&tx);

    assert_eq!(2, cpu.idx());
    assert!(cpu.fpga().duties().iter().all(|&d| d == 3));
}

#[test]
fn init() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);

    pack_header(&mut tx, 0x20, Command::Op, ControlFlags::FORCE_FAN);
    tx.body_mut(0).data_mut().fill(0xFFFF);
    tx.set_bodies_enabled(true);
    cpu.send(&tx);

    cpu.init();
    assert_eq!(0x00, cpu.last_msg_id());
    assert_eq!(0x0000, cpu.rx().word());
    assert_eq!(ControlFlags::SILENT, cpu.fpga().ctrl_flags());
    assert!(cpu.fpga().duties().iter().all(|&d| d == 0));
}
