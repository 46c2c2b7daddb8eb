pub const CPU_VERSION: u16 = 0x1000;

pub const MOD_BUF_SIZE: usize = 4000;

pub const INITIAL_MSG_ID: u8 = 0x00;
