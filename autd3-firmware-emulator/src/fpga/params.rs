pub const FPGA_VERSION: u16 = 0x1000;

pub const BRAM_ADDR_BITS: u32 = 18;
pub const BRAM_ADDR_MASK: u32 = (1 << BRAM_ADDR_BITS) - 1;

pub const BRAM_SELECT_TR: u8 = 0x0;
pub const BRAM_SELECT_MOD: u8 = 0x1;
pub const BRAM_SELECT_CONFIG: u8 = 0x2;
pub const BRAM_SELECT_STM: u8 = 0x3;

pub const ADDR_CTRL_FLAGS: usize = 0;
pub const ADDR_CLK_SYNC: usize = 2;
pub const ADDR_MOD_IDX_SHIFT: usize = 3;
pub const ADDR_REF_CLK_CYC_SHIFT: usize = 4;
pub const ADDR_SEQ_SIZE: usize = 5;
pub const ADDR_SEQ_DIV: usize = 6;
pub const ADDR_SEQ_CLK_OFFSET: usize = 7;
pub const ADDR_ULTRASOUND_CYCLE: usize = 8;
pub const ADDR_FPGA_VER: usize = 255;

pub const CONFIG_BRAM_SIZE: usize = 256;
pub const TR_BRAM_SIZE: usize = 512;
pub const TR_PHASE_OFFSET: usize = 256;
