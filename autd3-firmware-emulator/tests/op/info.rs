use autd3_driver::firmware::{
    cpu::{Command, ControlFlags, TxDatagram},
    operation::pack_header,
    version::FirmwareInfo,
    ProtocolGeneration,
};
use autd3_firmware_emulator::{cpu::params::CPU_VERSION, fpga::params::FPGA_VERSION, CPUEmulator};

use crate::{create_cpu, create_geometry};

fn read(cpu: &mut CPUEmulator, tx: &mut TxDatagram, msg_id: u8, command: Command) -> u8 {
    pack_header(tx, msg_id, command, ControlFlags::empty());
    cpu.send(tx);
    assert_eq!(msg_id, cpu.rx().ack());
    cpu.rx().data()
}

#[rstest::rstest]
#[case(ProtocolGeneration::Combined)]
#[case(ProtocolGeneration::Split)]
fn read_version(#[case] generation: ProtocolGeneration) {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, generation);
    let mut tx = TxDatagram::new(1);

    assert_eq!(
        (CPU_VERSION & 0xFF) as u8,
        read(&mut cpu, &mut tx, 0x21, Command::ReadCpuVerLsb)
    );
    assert_eq!(
        (CPU_VERSION >> 8) as u8,
        read(&mut cpu, &mut tx, 0x22, Command::ReadCpuVerMsb)
    );
    assert_eq!(
        (FPGA_VERSION & 0xFF) as u8,
        read(&mut cpu, &mut tx, 0x23, Command::ReadFpgaVerLsb)
    );
    assert_eq!(
        (FPGA_VERSION >> 8) as u8,
        read(&mut cpu, &mut tx, 0x24, Command::ReadFpgaVerMsb)
    );
}

#[test]
fn read_modified_fpga_version() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);
    cpu.fpga_mut().set_fpga_version(0xABCD);

    let cpu_version = (
        read(&mut cpu, &mut tx, 0x21, Command::ReadCpuVerLsb),
        read(&mut cpu, &mut tx, 0x22, Command::ReadCpuVerMsb),
    );
    let fpga_version = (
        read(&mut cpu, &mut tx, 0x23, Command::ReadFpgaVerLsb),
        read(&mut cpu, &mut tx, 0x24, Command::ReadFpgaVerMsb),
    );

    let info = FirmwareInfo::from_bytes(cpu.idx(), cpu_version, fpga_version);
    assert_eq!(CPU_VERSION, info.cpu_version);
    assert_eq!(0xABCD, info.fpga_version);
}
