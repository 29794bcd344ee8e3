use color_print::ceprintln;

/// Non-fatal finding attached to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msg {
    pub kind: MsgKind,
    pub text: String,
    pub line_idx: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKind {
    Warn,
    Note,
}

impl Msg {
    pub fn warn(text: String, line_idx: usize) -> Self {
        Msg {
            kind: MsgKind::Warn,
            text,
            line_idx,
        }
    }

    pub fn note(text: String, line_idx: usize) -> Self {
        Msg {
            kind: MsgKind::Note,
            text,
            line_idx,
        }
    }

    pub fn print(&self, file: &str, lines: &[String]) {
        match self.kind {
            MsgKind::Warn => ceprintln!("<yellow,bold>warn</>: {}", self.text),
            MsgKind::Note => ceprintln!("<green,bold>note</>: {}", self.text),
        }
        let line_num = self.line_idx + 1;
        let raw = lines.get(self.line_idx).map(|s| s.as_str()).unwrap_or("");
        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", line_num, raw);
        ceprintln!("      <blue>|</>");
    }
}

pub fn dump(msgs: &[Msg], file: &str, lines: &[String]) {
    for msg in msgs {
        msg.print(file, lines);
    }
}

pub fn count_warn(msgs: &[Msg]) -> usize {
    msgs.iter().filter(|msg| msg.kind == MsgKind::Warn).count()
}
