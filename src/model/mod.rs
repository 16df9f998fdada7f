mod common;
mod match_record;
mod table;

pub use common::*;
pub use match_record::*;
pub use table::*;
