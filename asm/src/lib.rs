pub mod encode;
pub mod error;
pub mod line;
pub mod msg;
pub mod parser;
pub mod symbol;
pub mod translate;
pub mod util;

pub use error::Error;
pub use symbol::SymbolTable;
pub use translate::{assemble, Emitted, Program, Translator};
