use color_print::ceprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid operand: `{0}`")]
    InvalidOperand(String),

    #[error("Operand out of range: `{0}` (max 32767)")]
    OperandRange(String),

    #[error("Malformed label declaration: `{0}`")]
    MalformedLabel(String),

    #[error("No free address left for variable `{0}`")]
    AddressSpaceExhausted(String),

    #[error("Program exceeds {0} instructions")]
    RomOverflow(usize),

    #[error("{source}")]
    At { line_idx: usize, source: Box<Error> },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    pub fn at(self, line_idx: usize) -> Self {
        Error::At {
            line_idx,
            source: Box::new(self),
        }
    }

    /// 0-based index of the source line the error belongs to.
    pub fn line_idx(&self) -> Option<usize> {
        match self {
            Error::At { line_idx, .. } => Some(*line_idx),
            _ => None,
        }
    }

    /// The error without its location.
    pub fn kind(&self) -> &Error {
        match self {
            Error::At { source, .. } => source.kind(),
            _ => self,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, lines: &[String]) {
        ceprintln!("<red,bold>error</>: {}", self);

        let Some(line_idx) = self.line_idx() else {
            return;
        };
        // line_idx is 0-based, display as 1-based
        let line_num = line_idx + 1;
        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        ceprintln!("      <blue>|</>");

        let line_content = lines.get(line_idx).map(|s| s.as_str()).unwrap_or("");

        ceprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        ceprintln!("      <blue>|</>");
    }
}
