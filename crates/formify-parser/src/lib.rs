//! Parser for Formify field descriptions.
//!
//! A field description is one field per line:
//!
//! ```text
//! Email (email, required)
//! Password (password, required)
//! ```
//!
//! Built on `nom` combinators. Parsing is all-or-nothing: the first line that
//! does not match aborts the batch.
//!
//! ```
//! let fields = formify_parser::parse("Email (email, required)\nBio (textarea, optional)").unwrap();
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields[0].label(), "Email");
//! assert!(!fields[1].is_required());
//! ```

mod grammar;
mod lexer;

pub use grammar::{parse, parse_line};
pub use lexer::{split_lines, Line};
