//! # LexiComb - Parser Combinators with a Lexical Layer
//!
//! LexiComb builds recursive-descent parsers out of small composable pieces.
//! On top of the combinator core it provides:
//!
//! - **Two failure channels**: a recoverable [`Maybe::Absent`] that
//!   alternatives may repair, and a fatal [`FatalError`] that aborts the parse
//! - **A configurable lexical layer**: whitespace tokens, line comments and
//!   case sensitivity live in a [`Lexer`] and are read at parse time
//! - **Expression grammars from operator tables**: [`expression`] turns
//!   precedence levels into a left-associative precedence-climbing parser
//!
//! ```
//! use lexicomb::calculate;
//!
//! assert_eq!(calculate("(3 + 4) * 2"), Ok(14.0));
//! ```

pub mod and;
pub mod ast;
pub mod bind;
pub mod calculator;
pub mod cursor;
pub mod default;
pub mod error;
pub mod expression;
pub mod filter;
pub mod lazy;
pub mod lexer;
pub mod many;
pub mod map;
pub mod maybe;
pub mod or;
pub mod parser;
pub mod position;
pub mod primitive;
pub mod settings;
pub mod some;

pub use and::AndExt;
pub use ast::{BinaryOp, Expr, arithmetic, signed_number};
pub use bind::BindExt;
pub use calculator::{CalcError, Calculator, calculate};
pub use cursor::SourceCursor;
pub use default::{DefaultExt, default};
pub use error::{CodeLoc, FatalError, ReadablePosition};
pub use expression::{Combine, PrecedenceLevel, expression};
pub use filter::FilterExt;
pub use lazy::lazy;
pub use lexer::Lexer;
pub use many::{ManyExt, many};
pub use map::MapExt;
pub use maybe::Maybe;
pub use or::{OrExt, or, or_many};
pub use parser::{BoxExt, BoxedParser, ParseResult, Parser, WeakParser, from_fn, parse};
pub use position::{Position, PositionExt, Span, position};
pub use primitive::{error, fail, succeed};
pub use settings::{ParserSettings, WhitespaceToken};
pub use some::{SomeExt, some};
