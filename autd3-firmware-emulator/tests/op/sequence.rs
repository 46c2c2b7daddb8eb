use autd3_driver::{
    core::geometry::Point3,
    datagram::PointSequence,
    firmware::{
        cpu::{Command, ControlFlags, TxDatagram, LAP_TAG_MASK, SEQ_LAP_REPORT_TAG},
        operation::{self, pack_header, sequence::SEQ_POINT_AMP},
        ProtocolGeneration,
    },
};
use autd3_firmware_emulator::{fpga::SeqPoint, CPUEmulator};
use itertools::Itertools;
use rand::Rng;

use crate::{create_cpu, create_geometry};

fn send_sequence(cpu: &mut CPUEmulator, seq: &mut PointSequence, msg_id: &mut u8) {
    let geometry = create_geometry(1);
    let mut tx = TxDatagram::new(1);
    while !seq.is_finished() {
        pack_header(&mut tx, *msg_id, Command::SeqMode, ControlFlags::SILENT);
        let flags = ControlFlags::SILENT | operation::sequence::pack(seq, &geometry, &mut tx);
        tx.header_mut().flags = flags.bits();
        cpu.send(&tx);
        assert_eq!(*msg_id, cpu.rx().ack());
        *msg_id += 1;
    }
}

#[rstest::rstest]
#[case(1)]
#[case(40)]
#[case(41)]
#[case(1000)]
fn send_seq(#[case] n: usize) -> anyhow::Result<()> {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);

    let mut rng = rand::rng();
    let points = (0..n)
        .map(|_| {
            Point3::new(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(0.0..300.0),
            )
        })
        .collect_vec();
    let mut seq = PointSequence::new(points.clone())?;
    seq.set_sampling_frequency_division(10);

    let mut msg_id = 0x20;
    send_sequence(&mut cpu, &mut seq, &mut msg_id);

    assert_eq!(n, cpu.fpga().seq_size());
    assert_eq!(10, cpu.fpga().seq_div());
    assert!(cpu.fpga().ctrl_flags().contains(ControlFlags::SEQ_MODE));

    let dev = &geometry[0];
    let unit = dev.wavelength() / 256.;
    let expected = points
        .iter()
        .map(|p| {
            let local = dev.local_position(p);
            SeqPoint {
                x: (local.x / unit) as i32,
                y: (local.y / unit) as i32,
                z: (local.z / unit) as i32,
                amp: SEQ_POINT_AMP,
            }
        })
        .collect_vec();
    assert_eq!(expected, cpu.fpga().seq_points());
    Ok(())
}

#[test]
fn lap_report_after_update() -> anyhow::Result<()> {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);
    cpu.set_lap(123);

    let mut seq = PointSequence::new(vec![Point3::origin(); 50])?;
    let mut msg_id = 0x20;
    send_sequence(&mut cpu, &mut seq, &mut msg_id);
    assert_eq!(0x21, cpu.rx().ack());

    cpu.update();
    let rx = cpu.rx();
    assert_eq!(SEQ_LAP_REPORT_TAG, rx.ack() & LAP_TAG_MASK);
    assert_eq!(123, rx.word() & 0x3FF);

    cpu.update();
    assert_eq!(rx, cpu.rx());
    Ok(())
}

#[test]
fn restart_sequence() -> anyhow::Result<()> {
    let geometry = create_geometry(1);
    let mut cpu = create_cpu(&geometry, ProtocolGeneration::Combined);

    let mut msg_id = 0x20;
    let mut seq = PointSequence::new(vec![Point3::origin(); 100])?;
    send_sequence(&mut cpu, &mut seq, &mut msg_id);
    assert_eq!(100, cpu.fpga().seq_size());

    let mut seq = PointSequence::new(vec![Point3::origin(); 3])?;
    send_sequence(&mut cpu, &mut seq, &mut msg_id);
    assert_eq!(3, cpu.fpga().seq_size());
    Ok(())
}
