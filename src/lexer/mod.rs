//! Lexical layer: the character stream that higher-level grammar rules see.
//!
//! Raw parsers in [`raw`] read the source as is. Everything handed out by a
//! [`Lexer`] goes through [`Lexer::character`], which skips line comments,
//! and consults the lexer's [`ParserSettings`] each time it runs.

pub mod ascii;
pub mod comment;
pub mod keyword;
pub mod raw;
pub mod whitespace;

use crate::settings::ParserSettings;
use std::cell::RefCell;
use std::rc::Rc;

pub use raw::{
    char_not_starting_any, raw_character, raw_literal, raw_literal_sequence, raw_sequence,
};

/// Parsing context holding the current lexical settings
///
/// Clones share the same settings. Parsers built from a lexer read the
/// settings each time they run, so a change made between two parses applies
/// to parsers that already exist. Changing settings while a parse is running
/// is not supported.
#[derive(Clone, Default)]
pub struct Lexer {
    settings: Rc<RefCell<Rc<ParserSettings>>>,
}

impl Lexer {
    pub fn new(settings: ParserSettings) -> Self {
        Lexer {
            settings: Rc::new(RefCell::new(Rc::new(settings))),
        }
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> Rc<ParserSettings> {
        Rc::clone(&self.settings.borrow())
    }

    pub fn replace_settings(&self, settings: ParserSettings) {
        tracing::trace!(
            whitespace = settings.whitespace.len(),
            line_comment = ?settings.line_comment,
            case_sensitive = settings.case_sensitive,
            "replacing lexer settings"
        );
        *self.settings.borrow_mut() = Rc::new(settings);
    }

    /// Edit a copy of the current settings and install it
    pub fn configure<F>(&self, edit: F)
    where
        F: FnOnce(&mut ParserSettings),
    {
        let mut settings = ParserSettings::clone(&self.settings());
        edit(&mut settings);
        self.replace_settings(settings);
    }
}
