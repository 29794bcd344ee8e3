use crate::error::Error;

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `(name)`
    Label(String),
    /// `@target`
    Address(Target),
    /// `dest=comp;jump`
    Compute(Fields),
}

impl Stmt {
    /// Classify a cleaned, non-empty line.
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        let mut chars = code.chars();
        match chars.next() {
            Some('(') => {
                let rest = chars.as_str();
                match rest.find(')') {
                    Some(0) | None => Err(Error::MalformedLabel(code.to_string())),
                    Some(end) => Ok(Stmt::Label(rest[..end].to_string())),
                }
            }
            Some('@') => Ok(Stmt::Address(Target::parse(chars.as_str())?)),
            Some(_) => Ok(Stmt::Compute(Fields::split(code))),
            None => Err(Error::InvalidOperand(code.to_string())),
        }
    }
}

// ----------------------------------------------------------------------------
// A-instruction target

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Literal(u32),
    Symbol(String),
}

impl Target {
    /// Names start with a letter. Anything else must be an unsigned decimal.
    pub fn parse(s: &str) -> Result<Target, Error> {
        match s.chars().next() {
            None => Err(Error::InvalidOperand(s.to_string())),
            Some(head) if head.is_ascii_alphabetic() => Ok(Target::Symbol(s.to_string())),
            Some(_) => {
                if !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::InvalidOperand(s.to_string()));
                }
                // All digits, so the only possible failure is overflow
                s.parse::<u32>()
                    .map(Target::Literal)
                    .map_err(|_| Error::OperandRange(s.to_string()))
            }
        }
    }
}

// ----------------------------------------------------------------------------
// C-instruction fields

/// `dest=comp;jump` split into its parts. Absent parts are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fields {
    pub dest: Option<String>,
    pub comp: Option<String>,
    pub jump: Option<String>,
}

impl Fields {
    /// Split on the first `=`, then on the first `;` of the remainder.
    pub fn split(code: &str) -> Fields {
        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (Some(dest), rest),
            None => (None, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump)),
            None => (rest, None),
        };
        Fields {
            dest: dest.map(str::to_string),
            comp: Some(comp).filter(|c| !c.is_empty()).map(str::to_string),
            jump: jump.map(str::to_string),
        }
    }

    pub fn dest(&self) -> &str {
        self.dest.as_deref().unwrap_or("")
    }

    pub fn comp(&self) -> &str {
        self.comp.as_deref().unwrap_or("")
    }

    pub fn jump(&self) -> &str {
        self.jump.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(dest: Option<&str>, comp: Option<&str>, jump: Option<&str>) -> Fields {
        Fields {
            dest: dest.map(str::to_string),
            comp: comp.map(str::to_string),
            jump: jump.map(str::to_string),
        }
    }

    macro_rules! test_stmt {
        ($($name:ident: $code:expr => $stmt:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(Stmt::parse($code).unwrap(), $stmt);
                }
            )*
        }
    }

    test_stmt! {
        test_label: "(LOOP)" => Stmt::Label("LOOP".to_string()),
        test_label_trailing: "(END) junk" => Stmt::Label("END".to_string()),
        test_label_dotted: "(Main.loop$1)" => Stmt::Label("Main.loop$1".to_string()),
        test_literal: "@21" => Stmt::Address(Target::Literal(21)),
        test_literal_zero: "@0" => Stmt::Address(Target::Literal(0)),
        test_literal_big: "@99999" => Stmt::Address(Target::Literal(99999)),
        test_symbol: "@sum" => Stmt::Address(Target::Symbol("sum".to_string())),
        test_symbol_digits: "@R15" => Stmt::Address(Target::Symbol("R15".to_string())),
        test_comp_only: "D" => Stmt::Compute(fields(None, Some("D"), None)),
        test_dest_comp: "MD=M+1" => Stmt::Compute(fields(Some("MD"), Some("M+1"), None)),
        test_comp_jump: "0;JMP" => Stmt::Compute(fields(None, Some("0"), Some("JMP"))),
        test_full: "AM=M-1;JNE" => Stmt::Compute(fields(Some("AM"), Some("M-1"), Some("JNE"))),
        test_empty_comp: "D=;JGT" => Stmt::Compute(fields(Some("D"), None, Some("JGT"))),
        test_semicolon_first: "D;A=1" => Stmt::Compute(fields(Some("D;A"), Some("1"), None)),
    }

    #[test]
    fn malformed_label() {
        assert!(matches!(Stmt::parse("(LOOP"), Err(Error::MalformedLabel(_))));
        assert!(matches!(Stmt::parse("()"), Err(Error::MalformedLabel(_))));
        assert!(matches!(Stmt::parse("("), Err(Error::MalformedLabel(_))));
    }

    #[test]
    fn invalid_operand() {
        assert!(matches!(Stmt::parse("@"), Err(Error::InvalidOperand(_))));
        assert!(matches!(Stmt::parse("@-1"), Err(Error::InvalidOperand(_))));
        assert!(matches!(Stmt::parse("@12a"), Err(Error::InvalidOperand(_))));
        assert!(matches!(Stmt::parse("@_tmp"), Err(Error::InvalidOperand(_))));
        assert!(matches!(Stmt::parse("@+5"), Err(Error::InvalidOperand(_))));
    }

    #[test]
    fn literal_overflow() {
        assert!(matches!(
            Stmt::parse("@99999999999"),
            Err(Error::OperandRange(s)) if s == "99999999999"
        ));
    }

    #[test]
    fn field_accessors() {
        let f = Fields::split("0;JMP");
        assert_eq!(f.dest(), "");
        assert_eq!(f.comp(), "0");
        assert_eq!(f.jump(), "JMP");
    }
}
