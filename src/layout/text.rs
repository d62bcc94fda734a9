use super::{Diagnostic, LayoutSink, Printed};
use crate::ast::{AstNode, NodeKind};
use crate::config::Config;
use crate::error::Error;

#[derive(Debug, Clone, Copy)]
enum Frame {
    /// `start` is the output length when the region opened
    Block { indents: bool, start: usize },
    Inline { annotation: bool },
}

/// Renders the token stream as indented plain text
#[derive(Debug)]
pub struct TextLayout {
    indent: String,
    marker: String,
    out: String,
    level: usize,
    frames: Vec<Frame>,
    suppress_pending: bool,
    space_pending: bool,
    diagnostics: Vec<Diagnostic>,
    failures: usize,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl TextLayout {
    pub fn new(config: &Config) -> Self {
        Self {
            indent: config.indent.clone(),
            marker: config.failure_marker.clone(),
            out: String::new(),
            level: 0,
            frames: Vec::new(),
            suppress_pending: false,
            space_pending: false,
            diagnostics: Vec::new(),
            failures: 0,
        }
    }

    /// Text emitted so far
    pub fn text(&self) -> &str {
        &self.out
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn finish(self) -> Printed {
        if !self.frames.is_empty() {
            log::warn!("layout finished with {} open region(s)", self.frames.len());
        }
        Printed {
            text: self.out.trim_end().to_string(),
            diagnostics: self.diagnostics,
            failures: self.failures,
        }
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if std::mem::take(&mut self.space_pending)
            && !self.at_line_start()
            && !self.out.ends_with(' ')
            && !text.starts_with([')', ']', ',', ';', '.'])
        {
            self.out.push(' ');
        }
        if self.at_line_start() {
            for _ in 0..self.level {
                self.out.push_str(&self.indent);
            }
        }
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        self.space_pending = false;
        if self.at_line_start() {
            return;
        }
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
        self.out.push('\n');
    }
}

impl LayoutSink for TextLayout {
    fn open_block(&mut self, node: Option<&dyn AstNode>) {
        let indents = node.is_none();
        if indents {
            self.level += 1;
        } else if !std::mem::take(&mut self.suppress_pending) {
            self.newline();
        }
        self.frames.push(Frame::Block { indents, start: self.out.len() });
    }

    fn close_block(&mut self) {
        match self.frames.pop() {
            Some(Frame::Block { indents: true, start }) => {
                self.level = self.level.saturating_sub(1);
                if self.out.len() > start {
                    self.newline();
                }
            }
            Some(Frame::Block { .. }) => {}
            Some(frame) => log::warn!("close_block closed {:?}", frame),
            None => log::warn!("close_block without an open region"),
        }
    }

    fn open_inline(&mut self, node: Option<&dyn AstNode>) {
        let annotation = node.map_or(false, |n| n.kind() == NodeKind::Annotation);
        self.frames.push(Frame::Inline { annotation });
    }

    fn close_inline(&mut self) {
        match self.frames.pop() {
            Some(Frame::Inline { annotation }) => {
                if annotation {
                    self.space_pending = true;
                }
            }
            Some(frame) => log::warn!("close_inline closed {:?}", frame),
            None => log::warn!("close_inline without an open region"),
        }
    }

    fn append(&mut self, text: &str) {
        self.write(text);
    }

    fn keyword(&mut self, text: &str) {
        self.write(text);
    }

    fn operator(&mut self, text: &str) {
        self.write(text);
    }

    fn space(&mut self) {
        self.space_pending = false;
        if !self.at_line_start() && !self.out.ends_with(' ') {
            self.out.push(' ');
        }
    }

    fn vertical_space(&mut self) {
        self.newline();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn start_suppress_block(&mut self) {
        self.suppress_pending = true;
    }

    fn end_suppress_block(&mut self) {
        self.suppress_pending = false;
    }

    fn fail(&mut self, reason: &str) {
        log::trace!("failure marker: {}", reason);
        self.failures += 1;
        let marked = format!("{}{}{}", self.marker, reason, self.marker);
        self.write(&marked);
    }

    fn report_assertion_failure(&mut self, node: &dyn AstNode, message: &str, cause: Option<&Error>) {
        let diagnostic = Diagnostic {
            kind: node.kind(),
            span: node.span(),
            message: message.to_string(),
            cause: cause.map(|e| e.to_string()),
        };
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}
