//! The scope protocol the printer drives, and a plain-text implementation of it.
//!
//! The printer never writes characters itself. It opens and closes regions
//! around every node and emits tokens in between; a [`LayoutSink`] decides
//! where lines break and how far they are indented.

mod text;

pub use text::TextLayout;

use std::fmt;

use crate::ast::{AstNode, NodeKind, Span};
use crate::error::Error;

/// Receiver of the printer's token stream.
///
/// Calls to `open_*` and `close_*` arrive strictly nested.
pub trait LayoutSink {
    /// Open a line-oriented region. `None` opens an anonymous, indented region
    fn open_block(&mut self, node: Option<&dyn AstNode>);
    fn close_block(&mut self);

    /// Open a region that stays on the current line
    fn open_inline(&mut self, node: Option<&dyn AstNode>);
    fn close_inline(&mut self);

    fn append(&mut self, text: &str);
    fn keyword(&mut self, text: &str);
    fn operator(&mut self, text: &str);

    /// A mandatory separating space
    fn space(&mut self);

    /// A blank line between items
    fn vertical_space(&mut self);

    /// The next block region continues the current line instead of starting a new one
    fn start_suppress_block(&mut self);
    fn end_suppress_block(&mut self);

    /// Emit a visible in-band failure marker
    fn fail(&mut self, reason: &str);

    /// Record an inconsistency of the tree; never part of the emitted text
    fn report_assertion_failure(&mut self, node: &dyn AstNode, message: &str, cause: Option<&Error>);
}

/// Out-of-band report about a node that claims validity but is malformed
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: NodeKind,
    pub span: Span,
    pub message: String,
    pub cause: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.span, self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, " ({})", cause)?;
        }
        Ok(())
    }
}

/// Result of printing one tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Printed {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
    /// Number of in-band failure markers in `text`
    pub failures: usize,
}

impl Printed {
    /// True when the text contains no failure marker and no diagnostic was raised
    pub fn is_clean(&self) -> bool {
        self.failures == 0 && self.diagnostics.is_empty()
    }
}

impl fmt::Display for Printed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
