use crate::{comp::Comp, dest::Dest, jump::Jump, reg::MAX_ADDR};

use color_print::cformat;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `0vvv vvvv vvvv vvvv`
    A(u16),
    /// `111a cccc ccdd djjj`
    C(Comp, Dest, Jump),
}

impl Inst {
    /// A-instruction, or `None` when `value` does not fit in 15 bits.
    pub fn address(value: u32) -> Option<Inst> {
        if value > MAX_ADDR as u32 {
            None
        } else {
            Some(Inst::A(value as u16))
        }
    }

    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::A(addr) => addr & MAX_ADDR,
            Inst::C(comp, dest, jump) => {
                0b111 << 13
                    | (comp.code() as u16) << 6
                    | (dest.bits() as u16) << 3
                    | jump.bits() as u16
            }
        }
    }

    pub fn from_bin(bin: u16) -> Inst {
        if bin & 0x8000 == 0 {
            Inst::A(bin)
        } else {
            Inst::C(
                Comp::from_code((bin >> 6) as u8),
                Dest::from_bits((bin >> 3) as u8 & 0b111),
                Jump::from_bits(bin as u8 & 0b111),
            )
        }
    }

    /// 16 characters of `0`/`1`, most significant bit first.
    pub fn to_text(&self) -> String {
        format!("{:016b}", self.to_bin())
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(addr) => cformat!("<y>@{}</>", addr),
            Inst::C(comp, dest, jump) => {
                let comp = match comp.mnemonic() {
                    Some(m) => cformat!("<r>{}</>", m),
                    None => cformat!("<r,u>?{:07b}</>", comp.code()),
                };
                let dest = match dest.is_empty() {
                    true => String::new(),
                    false => cformat!("<b>{}</>=", dest),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    _ => cformat!(";<g>{}</>", jump),
                };
                format!("{}{}{}", dest, comp, jump)
            }
        }
    }
}

/// Plain mnemonic, e.g. `@17`, `AM=M-1;JNE`.
impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::A(addr) => write!(f, "@{}", addr),
            Inst::C(comp, dest, jump) => {
                if !dest.is_empty() {
                    write!(f, "{}=", dest)?;
                }
                match comp.mnemonic() {
                    Some(m) => write!(f, "{}", m)?,
                    None => write!(f, "?{:07b}", comp.code())?,
                }
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(comp: &str, dest: &str, jump: &str) -> Inst {
        Inst::C(
            Comp::parse(comp).unwrap(),
            Dest::parse(dest).0,
            Jump::parse(jump).unwrap(),
        )
    }

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $text:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_text(), $text);
                    let inst_back = Inst::from_bin(inst.to_bin());
                    assert_eq!(inst, inst_back);
                }
            )*
        }
    }

    test_inst! {
        test_a_zero: Inst::A(0) => "0000000000000000",
        test_a_two: Inst::A(2) => "0000000000000010",
        test_a_max: Inst::A(32767) => "0111111111111111",
        test_a_screen: Inst::A(16384) => "0100000000000000",
        test_d_eq_a: c("A", "D", "") => "1110110000010000",
        test_d_eq_d_plus_a: c("D+A", "D", "") => "1110000010010000",
        test_m_eq_d: c("D", "M", "") => "1110001100001000",
        test_jmp: c("0", "", "JMP") => "1110101010000111",
        test_d_jgt: c("D", "", "JGT") => "1110001100000001",
        test_amd_m_plus_1: c("M+1", "AMD", "") => "1111110111111000",
        test_am_jne: c("M-D", "AM", "JNE") => "1111000111101101",
    }

    #[test]
    fn address_range() {
        assert_eq!(Inst::address(0), Some(Inst::A(0)));
        assert_eq!(Inst::address(32767), Some(Inst::A(32767)));
        assert_eq!(Inst::address(32768), None);
        assert_eq!(Inst::address(u32::MAX), None);
    }

    #[test]
    fn all_addresses() {
        for value in 0..=MAX_ADDR as u32 {
            let text = Inst::address(value).unwrap().to_text();
            assert_eq!(text.len(), 16);
            assert!(text.starts_with('0'));
            assert_eq!(u32::from_str_radix(&text[1..], 2), Ok(value));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Inst::A(17).to_string(), "@17");
        assert_eq!(c("M-D", "AM", "JNE").to_string(), "AM=M-D;JNE");
        assert_eq!(c("0", "", "JMP").to_string(), "0;JMP");
        assert_eq!(c("D+1", "D", "").to_string(), "D=D+1");
        assert_eq!(Inst::from_bin(0b1110_0000_0100_0000).to_string(), "?0000001");
    }

    #[test]
    fn decode_unknown_comp() {
        let inst = Inst::from_bin(0b1110_0000_0100_0000);
        match inst {
            Inst::C(comp, dest, jump) => {
                assert_eq!(comp.code(), 0b0000001);
                assert_eq!(comp.mnemonic(), None);
                assert!(dest.is_empty());
                assert_eq!(jump, Jump::Null);
            }
            _ => panic!("expected C-instruction"),
        }
    }
}
