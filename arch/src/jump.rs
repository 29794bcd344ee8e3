use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Jump condition of a C-instruction, compared against the ALU output.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(to_string = "")]
    Null,
    JGT,
    JEQ,
    JGE,
    JLT,
    JNE,
    JLE,
    JMP,
}

impl Jump {
    /// Used when the mnemonic is not recognized.
    pub const FALLBACK: Jump = Jump::JMP;

    /// Mnemonics are case sensitive. An empty field is `Null`.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(&self) -> u8 {
        (*self).into()
    }

    pub fn from_bits(bits: u8) -> Self {
        Jump::from(bits & 0b111)
    }
}

#[test]
fn test() {
    use strum::IntoEnumIterator;

    assert_eq!(Jump::parse(""), Some(Jump::Null));
    assert_eq!(Jump::parse("JGT"), Some(Jump::JGT));
    assert_eq!(Jump::parse("JMP"), Some(Jump::JMP));
    assert_eq!(Jump::parse("jmp"), None);
    assert_eq!(Jump::parse("JXX"), None);
    for (bits, jump) in Jump::iter().enumerate() {
        assert_eq!(jump.bits(), bits as u8);
        assert_eq!(Jump::from_bits(bits as u8), jump);
        assert_eq!(Jump::parse(&jump.to_string()), Some(jump));
    }
}
