use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Largest value an A-instruction can carry (15 bits).
pub const MAX_ADDR: u16 = 0x7FFF;

/// Number of instruction words the ROM holds.
pub const ROM_SIZE: usize = 0x8000;

/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

/// Virtual registers, aliases of RAM[0..16].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display, EnumIter)]
#[repr(u16)]
pub enum Reg {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
}

/// VM segment pointers. They alias R0..R4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display, EnumIter)]
#[repr(u16)]
pub enum Ptr {
    SP,
    LCL,
    ARG,
    THIS,
    THAT,
}

/// Memory mapped I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display, EnumIter)]
#[repr(u16)]
pub enum Io {
    SCREEN = 0x4000,
    KBD = 0x6000,
}

/// Every name the assembler knows before reading any source.
pub fn predefined() -> Vec<(String, u16)> {
    let regs = Reg::iter().map(|r| (r.to_string(), u16::from(r)));
    let ptrs = Ptr::iter().map(|p| (p.to_string(), u16::from(p)));
    let io = Io::iter().map(|p| (p.to_string(), u16::from(p)));
    regs.chain(ptrs).chain(io).collect()
}

#[test]
fn test() {
    let names = predefined();
    assert_eq!(names.len(), 23);
    assert!(names.contains(&("R0".to_string(), 0)));
    assert!(names.contains(&("R15".to_string(), 15)));
    assert!(names.contains(&("THAT".to_string(), 4)));
    assert!(names.contains(&("SCREEN".to_string(), 16384)));
    assert!(names.contains(&("KBD".to_string(), 24576)));
    assert_eq!("R7".parse::<Reg>(), Ok(Reg::R7));
    assert!("r7".parse::<Reg>().is_err());
}
