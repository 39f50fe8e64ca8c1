pub mod dataset;
pub mod intent_parser;

pub use self::dataset::*;
pub use self::intent_parser::*;
