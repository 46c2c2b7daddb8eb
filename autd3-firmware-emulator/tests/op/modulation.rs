use autd3_driver::{
    core::modulation::{Modulation, ModulationError, SamplingConfig},
    datagram::ModulationCache,
    firmware::{
        cpu::{Command, ControlFlags, TxDatagram},
        operation::{self, pack_header},
        ProtocolGeneration,
    },
};
use rand::Rng;

use crate::{create_cpu, create_geometry};

#[derive(Debug)]
struct TestModulation {
    buf: Vec<u8>,
}

impl Modulation for TestModulation {
    fn calc(&self, _: &SamplingConfig) -> Result<Vec<u8>, ModulationError> {
        Ok(self.buf.clone())
    }
}

#[rstest::rstest]
#[case(1)]
#[case(124)]
#[case(125)]
#[case(300)]
#[case(4000)]
fn send_modulation(#[case] n: usize) -> anyhow::Result<()> {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);

    let mut rng = rand::rng();
    let buf: Vec<u8> = (0..n).map(|_| rng.random()).collect();
    let mut m = ModulationCache::new(TestModulation { buf: buf.clone() });
    m.build(&SamplingConfig::default())?;

    let mut msg_id = 0x20;
    while !m.is_finished() {
        pack_header(&mut tx, msg_id, Command::Op, ControlFlags::SILENT);
        let flags = ControlFlags::SILENT | operation::modulation::pack(&mut m, &mut tx);
        tx.header_mut().flags = flags.bits();
        cpu.send(&tx);
        assert_eq!(msg_id, cpu.rx().ack());
        msg_id += 1;
    }

    let modulation = cpu.fpga().modulation();
    assert_eq!(4000, modulation.len());
    modulation
        .iter()
        .enumerate()
        .for_each(|(i, &v)| assert_eq!(buf[i % n], v));
    Ok(())
}

#[test]
fn modulation_is_written_at_end() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    let mut tx = TxDatagram::new(1);

    pack_header(&mut tx, 0x20, Command::Op, ControlFlags::MOD_BEGIN);
    tx.header_mut().payload[0] = 1;
    tx.header_mut().payload[1] = 0x10;
    cpu.send(&tx);
    assert!(cpu.fpga().modulation().iter().all(|&m| m == 0xFF));

    pack_header(&mut tx, 0x21, Command::Op, ControlFlags::MOD_END);
    tx.header_mut().payload[0] = 1;
    tx.header_mut().payload[1] = 0x20;
    cpu.send(&tx);

    let modulation = cpu.fpga().modulation();
    assert!(modulation.chunks_exact(2).all(|c| c == [0x10, 0x20]));
}

#[test]
fn modulation_not_supported_in_split() {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Split);
    let mut tx = TxDatagram::new(1);

    pack_header(
        &mut tx,
        0x01,
        Command::Op,
        ControlFlags::MOD_BEGIN | ControlFlags::MOD_END,
    );
    tx.header_mut().payload[0] = 1;
    tx.header_mut().payload[1] = 0x10;
    cpu.send(&tx);

    assert_eq!(0x01, cpu.rx().ack());
    assert!(cpu.fpga().modulation().iter().all(|&m| m == 0x00));
}
