//! HTTP header table.
mod id;
mod field;
mod table;

pub use id::{Direction, HeaderId, is_protected_name};
pub use field::{HeaderField, HeaderLine, Lines};
pub use table::HeaderTable;

#[cfg(test)]
mod test;
