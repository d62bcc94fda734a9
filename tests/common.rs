// Common test utilities

use tolc_unparse::ast::{AstNode, Node};
use tolc_unparse::{Error, LayoutSink, Printed, SourcePrinter, TextLayout};

pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Wraps a [`TextLayout`] and checks that regions open and close in pairs
pub struct RecordingSink {
    inner: TextLayout,
    open: Vec<&'static str>,
    pub opened: usize,
    pub closed: usize,
    pub max_nesting: usize,
    pub violations: Vec<String>,
    suppress_balance: isize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            inner: TextLayout::default(),
            open: Vec::new(),
            opened: 0,
            closed: 0,
            max_nesting: 0,
            violations: Vec::new(),
            suppress_balance: 0,
        }
    }

    fn push(&mut self, what: &'static str) {
        self.opened += 1;
        self.open.push(what);
        self.max_nesting = self.max_nesting.max(self.open.len());
    }

    fn pop(&mut self, what: &'static str) {
        self.closed += 1;
        match self.open.pop() {
            Some(top) if top == what => {}
            Some(top) => self.violations.push(format!("closed {} while {} was open", what, top)),
            None => self.violations.push(format!("closed {} with nothing open", what)),
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.violations.is_empty() && self.open.is_empty() && self.opened == self.closed && self.suppress_balance == 0
    }

    pub fn finish(self) -> Printed {
        self.inner.finish()
    }
}

impl LayoutSink for RecordingSink {
    fn open_block(&mut self, node: Option<&dyn AstNode>) {
        self.push("block");
        self.inner.open_block(node);
    }

    fn close_block(&mut self) {
        self.pop("block");
        self.inner.close_block();
    }

    fn open_inline(&mut self, node: Option<&dyn AstNode>) {
        self.push("inline");
        self.inner.open_inline(node);
    }

    fn close_inline(&mut self) {
        self.pop("inline");
        self.inner.close_inline();
    }

    fn append(&mut self, text: &str) {
        self.inner.append(text);
    }

    fn keyword(&mut self, text: &str) {
        self.inner.keyword(text);
    }

    fn operator(&mut self, text: &str) {
        self.inner.operator(text);
    }

    fn space(&mut self) {
        self.inner.space();
    }

    fn vertical_space(&mut self) {
        self.inner.vertical_space();
    }

    fn start_suppress_block(&mut self) {
        self.suppress_balance += 1;
        self.inner.start_suppress_block();
    }

    fn end_suppress_block(&mut self) {
        self.suppress_balance -= 1;
        if self.suppress_balance < 0 {
            self.violations.push("end_suppress_block without a start".to_string());
        }
        self.inner.end_suppress_block();
    }

    fn fail(&mut self, reason: &str) {
        self.inner.fail(reason);
    }

    fn report_assertion_failure(&mut self, node: &dyn AstNode, message: &str, cause: Option<&Error>) {
        self.inner.report_assertion_failure(node, message, cause);
    }
}

/// Print through a [`RecordingSink`], asserting balance along the way
pub fn print_checked(node: &Node) -> Printed {
    let mut sink = RecordingSink::new();
    SourcePrinter::default().print(Some(node), &mut sink);
    assert!(sink.is_balanced(), "unbalanced regions: {:?}", sink.violations);
    sink.finish()
}

pub fn some(node: impl Into<Node>) -> Option<Box<Node>> {
    Some(Box::new(node.into()))
}
