use bitflags::bitflags;

bitflags! {
    /// Control flags carried in the frame header.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ControlFlags : u8 {
        /// The frame carries the first chunk of a modulation.
        const MOD_BEGIN = 1 << 0;
        /// The frame carries the last chunk of a modulation.
        const MOD_END   = 1 << 1;
        /// Low-noise operation.
        const SILENT    = 1 << 3;
        /// Force the cooling fan on.
        const FORCE_FAN = 1 << 4;
        /// The devices are in point sequence mode.
        const SEQ_MODE  = 1 << 5;
        /// The frame carries the first chunk of a point sequence.
        const SEQ_BEGIN = 1 << 6;
        /// The frame carries the last chunk of a point sequence.
        const SEQ_END   = 1 << 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits() {
        assert_eq!(0x01, ControlFlags::MOD_BEGIN.bits());
        assert_eq!(0x02, ControlFlags::MOD_END.bits());
        assert_eq!(0x08, ControlFlags::SILENT.bits());
        assert_eq!(0x10, ControlFlags::FORCE_FAN.bits());
        assert_eq!(0x20, ControlFlags::SEQ_MODE.bits());
        assert_eq!(0x40, ControlFlags::SEQ_BEGIN.bits());
        assert_eq!(0x80, ControlFlags::SEQ_END.bits());
    }

    #[test]
    fn cumulative() {
        let flags = ControlFlags::MOD_BEGIN | ControlFlags::MOD_END | ControlFlags::SILENT;
        assert_eq!(0x0B, flags.bits());
        assert!(flags.contains(ControlFlags::MOD_BEGIN));
        assert!(!flags.contains(ControlFlags::SEQ_MODE));
    }
}
