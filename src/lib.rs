//! tolc-unparse
//!
//! A fault-tolerant Java source printer: turns a syntax tree, possibly
//! incomplete or corrupted, back into formatted source text.
//!
//! ## Architecture
//!
//! - **ast**: node model, literal codecs, operator table and the parenthesization pass
//! - **layout**: the region/token protocol the printer drives, and a plain-text layout
//! - **printer**: one rendering rule per node kind
//! - **config**: indentation, failure marker and nesting limit
//!
//! ## Printing Flow
//!
//! ```text
//! Node tree → precedence::assign_parentheses → SourcePrinter → LayoutSink → Printed
//!                                                                ↓
//!                                            text + failure markers + diagnostics
//! ```
//!
//! Malformed trees never make printing fail: broken pieces show up as
//! `█REASON█` markers in the text, and nodes that claim to be valid while
//! being broken are listed in [`Printed::diagnostics`].

pub mod ast;
pub mod config;
pub mod error;
pub mod layout;
pub mod printer;

pub use config::Config;
pub use error::{Error, Result};
pub use layout::{Diagnostic, LayoutSink, Printed, TextLayout};
pub use printer::SourcePrinter;

use ast::Node;

/// Print a tree with the default configuration
pub fn print_source(node: &Node) -> Printed {
    print_source_with(node, &Config::default())
}

/// Print a tree into a fresh [`TextLayout`] built from `config`
pub fn print_source_with(node: &Node, config: &Config) -> Printed {
    let mut layout = TextLayout::new(config);
    SourcePrinter::new(config).print(Some(node), &mut layout);
    layout.finish()
}
