use autd3_driver::{
    core::{common::DEFAULT_CYCLE, devices::AUTD3, geometry::Geometry},
    firmware::{
        cpu::{Command, ControlFlags, TxDatagram},
        operation::{self, pack_header},
        ProtocolGeneration,
    },
};

use crate::create_cpu;

#[rstest::rstest]
#[case(4000, ProtocolGeneration::Split)]
#[case(DEFAULT_CYCLE, ProtocolGeneration::Combined)]
fn send_ultrasound_cycle(#[case] expected: u16, #[case] generation: ProtocolGeneration) {
    let geometry = Geometry::new(vec![AUTD3 {
        cycle: 4000,
        ..AUTD3::default()
    }
    .into()]);
    let mut cpu = create_cpu(&geometry, generation);
    let mut tx = TxDatagram::new(1);

    pack_header(&mut tx, 0x22, Command::UltrasoundCycleCnt, ControlFlags::empty());
    operation::frequency::pack(&geometry, &mut tx);
    cpu.send(&tx);

    assert_eq!(0x22, cpu.rx().ack());
    assert_eq!(expected, cpu.fpga().ultrasound_cycle());
}
