use super::Walker;
use crate::ast::{
    AssertStmt, AstNode, Block, CaseLabel, CatchClause, DefaultLabel, DoWhileStmt, ExprStmt, ForEachStmt, ForStmt,
    IfStmt, LabeledStmt, Node, SuperCtorCall, SwitchStmt, SynchronizedStmt, ThisCtorCall, TryStmt, VarDeclStmt,
    WhileStmt,
};
use crate::layout::LayoutSink;

/// Whether a statement's trailing edge is an `if` with no `else` of its own
fn ends_in_open_if(mut node: Option<&Node>) -> bool {
    while let Some(current) = node {
        node = match current {
            Node::If(n) if n.else_statement.is_none() => return true,
            Node::If(n) => n.else_statement.as_deref(),
            Node::For(n) => n.statement.as_deref(),
            Node::ForEach(n) => n.statement.as_deref(),
            Node::While(n) => n.statement.as_deref(),
            Node::LabelledStatement(n) => n.statement.as_deref(),
            _ => return false,
        };
    }
    false
}

impl<'a, L: LayoutSink + ?Sized> Walker<'a, L> {
    /// `keyword (condition)` head shared by `if`, `while`, `switch` and `synchronized`
    fn head(&mut self, keyword: &str, condition: Option<&Node>) {
        self.layout.keyword(keyword);
        self.layout.space();
        self.layout.append("(");
        self.visit(condition);
        self.layout.append(")");
        self.layout.space();
    }

    pub(super) fn expression_statement(&mut self, n: &ExprStmt) {
        self.block(n, |w| {
            w.visit(n.expression.as_deref());
            w.layout.append(";");
        });
    }

    pub(super) fn labelled_statement(&mut self, n: &LabeledStmt) {
        self.block(n, |w| {
            if n.label.is_some() {
                w.visit(n.label.as_deref());
                w.layout.append(":");
                w.layout.space();
            }
            w.suppressed(n.statement.as_deref());
        });
    }

    pub(super) fn if_statement(&mut self, n: &IfStmt) {
        self.block(n, |w| {
            w.head("if", n.condition.as_deref());
            if n.else_statement.is_some() && ends_in_open_if(n.statement.as_deref()) {
                // Braces keep the `else` from binding to the inner `if`
                w.layout.append("{");
                w.anon_block(|w| w.visit(n.statement.as_deref()));
                w.layout.append("}");
            } else {
                w.suppressed(n.statement.as_deref());
            }
            if n.else_statement.is_some() {
                w.layout.space();
                w.layout.keyword("else");
                w.layout.space();
                w.suppressed(n.else_statement.as_deref());
            }
        });
    }

    pub(super) fn for_statement(&mut self, n: &ForStmt) {
        self.block(n, |w| {
            w.layout.keyword("for");
            w.layout.space();
            w.layout.append("(");
            w.list(&n.inits, ", ", "", "");
            w.layout.append(";");
            if n.condition.is_some() {
                w.layout.space();
                w.visit(n.condition.as_deref());
            }
            w.layout.append(";");
            w.list(&n.updates, ", ", " ", "");
            w.layout.append(")");
            w.layout.space();
            w.suppressed(n.statement.as_deref());
        });
    }

    pub(super) fn for_each(&mut self, n: &ForEachStmt) {
        self.block(n, |w| {
            w.layout.keyword("for");
            w.layout.space();
            w.layout.append("(");
            w.visit(n.variable.as_deref());
            w.layout.space();
            w.layout.append(":");
            w.layout.space();
            w.visit(n.iterable.as_deref());
            w.layout.append(")");
            w.layout.space();
            w.suppressed(n.statement.as_deref());
        });
    }

    pub(super) fn while_statement(&mut self, n: &WhileStmt) {
        self.block(n, |w| {
            w.head("while", n.condition.as_deref());
            w.suppressed(n.statement.as_deref());
        });
    }

    pub(super) fn do_while(&mut self, n: &DoWhileStmt) {
        self.block(n, |w| {
            w.layout.keyword("do");
            w.layout.space();
            w.suppressed(n.statement.as_deref());
            w.layout.space();
            w.layout.keyword("while");
            w.layout.space();
            w.layout.append("(");
            w.visit(n.condition.as_deref());
            w.layout.append(")");
            w.layout.append(";");
        });
    }

    pub(super) fn try_statement(&mut self, n: &TryStmt) {
        self.block(n, |w| {
            w.layout.keyword("try");
            w.layout.space();
            w.suppressed(n.body.as_deref());
            w.list(&n.catches, " ", " ", "");
            if n.finally.is_some() {
                w.layout.space();
                w.layout.keyword("finally");
                w.layout.space();
                w.suppressed(n.finally.as_deref());
            }
        });
    }

    pub(super) fn catch_clause(&mut self, n: &CatchClause) {
        self.inline(n, |w| {
            w.head("catch", n.exception_declaration.as_deref());
            w.suppressed(n.body.as_deref());
        });
    }

    pub(super) fn switch_statement(&mut self, n: &SwitchStmt) {
        self.block(n, |w| {
            w.head("switch", n.condition.as_deref());
            w.suppressed(n.body.as_deref());
        });
    }

    pub(super) fn case_label(&mut self, n: &CaseLabel) {
        self.block(n, |w| {
            w.layout.keyword("case");
            w.layout.space();
            w.visit(n.condition.as_deref());
            w.layout.append(":");
        });
    }

    pub(super) fn default_label(&mut self, n: &DefaultLabel) {
        self.block(n, |w| {
            w.layout.keyword("default");
            w.layout.append(":");
        });
    }

    /// `break`, `continue`, `return` and `throw` with their optional operand
    pub(super) fn jump(&mut self, n: &dyn AstNode, keyword: &str, operand: Option<&Node>) {
        self.block(n, |w| {
            w.layout.keyword(keyword);
            if operand.is_some() {
                w.layout.space();
                w.visit(operand);
            }
            w.layout.append(";");
        });
    }

    pub(super) fn assert_statement(&mut self, n: &AssertStmt) {
        self.block(n, |w| {
            w.layout.keyword("assert");
            w.layout.space();
            w.visit(n.assertion.as_deref());
            if n.message.is_some() {
                w.layout.space();
                w.layout.append(":");
                w.layout.space();
                w.visit(n.message.as_deref());
            }
            w.layout.append(";");
        });
    }

    pub(super) fn synchronized(&mut self, n: &SynchronizedStmt) {
        self.block(n, |w| {
            w.head("synchronized", n.lock.as_deref());
            w.suppressed(n.body.as_deref());
        });
    }

    pub(super) fn block_statement(&mut self, n: &Block) {
        self.block(n, |w| {
            w.layout.append("{");
            w.anon_block(|w| w.list(&n.contents, "", "", ""));
            w.layout.append("}");
        });
    }

    pub(super) fn variable_declaration(&mut self, n: &VarDeclStmt) {
        self.block(n, |w| {
            w.visit(n.definition.as_deref());
            w.layout.append(";");
        });
    }

    pub(super) fn super_constructor_invocation(&mut self, n: &SuperCtorCall) {
        self.block(n, |w| {
            w.qualifier(n.qualifier.as_deref());
            w.visit(n.type_arguments.as_deref());
            w.layout.keyword("super");
            w.layout.append("(");
            w.list(&n.arguments, ", ", "", "");
            w.layout.append(");");
        });
    }

    pub(super) fn alternate_constructor_invocation(&mut self, n: &ThisCtorCall) {
        self.block(n, |w| {
            w.visit(n.type_arguments.as_deref());
            w.layout.keyword("this");
            w.layout.append("(");
            w.list(&n.arguments, ", ", "", "");
            w.layout.append(");");
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::print_source;
    use pretty_assertions::assert_eq;

    fn text(node: &Node) -> String {
        print_source(node).text
    }

    fn call(name: &str) -> Node {
        Node::expr_stmt(Node::call(None, name, vec![]))
    }

    fn if_stmt(then: Node, otherwise: Option<Node>) -> Node {
        IfStmt {
            condition: Some(Box::new(Node::ident("x"))),
            statement: Some(Box::new(then)),
            else_statement: otherwise.map(Box::new),
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn if_without_braces_stays_on_one_line() {
        assert_eq!(text(&if_stmt(call("y"), None)), "if (x) y();");
    }

    #[test]
    fn if_with_block_and_else() {
        let tree = if_stmt(Node::block(vec![call("a")]), Some(Node::block(vec![call("b")])));
        assert_eq!(text(&tree), "if (x) {\n  a();\n} else {\n  b();\n}");
    }

    #[test]
    fn dangling_else_gets_braces() {
        let tree = if_stmt(if_stmt(call("y"), None), Some(call("z")));
        assert_eq!(text(&tree), "if (x) {\n  if (x) y();\n} else z();");

        let looped: Node = WhileStmt {
            condition: Some(Box::new(Node::ident("w"))),
            statement: Some(Box::new(if_stmt(call("y"), None))),
            ..Default::default()
        }
        .into();
        let tree = if_stmt(looped, Some(call("z")));
        assert_eq!(text(&tree), "if (x) {\n  while (w) if (x) y();\n} else z();");

        let closed = if_stmt(if_stmt(call("y"), Some(call("v"))), Some(call("z")));
        assert_eq!(text(&closed), "if (x) if (x) y(); else v(); else z();");
    }

    #[test]
    fn else_if_chain() {
        let tree = if_stmt(Node::block(vec![]), Some(if_stmt(call("z"), None)));
        assert_eq!(text(&tree), "if (x) {} else if (x) z();");
    }

    #[test]
    fn statements_in_a_block_get_their_own_lines() {
        let tree = Node::block(vec![
            Node::local("int", "i", Some(Node::int("0"))),
            Node::expr_stmt(Node::unary("++", true, Node::ident("i"))),
            Node::ret(Some(Node::ident("i"))),
        ]);
        assert_eq!(text(&tree), "{\n  int i = 0;\n  i++;\n  return i;\n}");
    }

    #[test]
    fn for_loop_header() {
        let tree: Node = ForStmt {
            inits: vec![Node::var_def("int", "i", Some(Node::int("0")))],
            condition: Some(Box::new(Node::binary(Node::ident("i"), "<", Node::ident("n")))),
            updates: vec![Node::unary("++", true, Node::ident("i"))],
            statement: Some(Box::new(Node::block(vec![]))),
            ..Default::default()
        }
        .into();
        assert_eq!(text(&tree), "for (int i = 0; i < n; i++) {}");

        let forever: Node = ForStmt { statement: Some(Box::new(call("spin"))), ..Default::default() }.into();
        assert_eq!(text(&forever), "for (;;) spin();");
    }

    #[test]
    fn do_while_and_labels() {
        let tree: Node = LabeledStmt {
            label: Some(Box::new(Node::ident("outer"))),
            statement: Some(Box::new(
                DoWhileStmt {
                    statement: Some(Box::new(Node::block(vec![BreakStmt {
                        label: Some(Box::new(Node::ident("outer"))),
                        ..Default::default()
                    }
                    .into()]))),
                    condition: Some(Box::new(Node::boolean(true))),
                    ..Default::default()
                }
                .into(),
            )),
            ..Default::default()
        }
        .into();
        assert_eq!(text(&tree), "outer: do {\n  break outer;\n} while (true);");
    }

    #[test]
    fn try_catch_finally() {
        let catch: Node = CatchClause {
            exception_declaration: Some(Box::new(Node::var_def("Exception", "e", None))),
            body: Some(Box::new(Node::block(vec![]))),
            ..Default::default()
        }
        .into();
        let tree: Node = TryStmt {
            body: Some(Box::new(Node::block(vec![call("work")]))),
            catches: vec![catch],
            finally: Some(Box::new(Node::block(vec![]))),
            ..Default::default()
        }
        .into();
        assert_eq!(text(&tree), "try {\n  work();\n} catch (Exception e) {} finally {}");
    }

    #[test]
    fn switch_closes_its_region() {
        let tree: Node = SwitchStmt {
            condition: Some(Box::new(Node::ident("k"))),
            body: Some(Box::new(Node::block(vec![
                CaseLabel { condition: Some(Box::new(Node::int("1"))), ..Default::default() }.into(),
                BreakStmt::default().into(),
                DefaultLabel::default().into(),
                Node::ret(None),
            ]))),
            ..Default::default()
        }
        .into();
        let printed = print_source(&Node::block(vec![tree, call("after")]));
        assert_eq!(
            printed.text,
            "{\n  switch (k) {\n    case 1:\n    break;\n    default:\n    return;\n  }\n  after();\n}"
        );
    }

    #[test]
    fn throw_prints_its_operand() {
        let tree: Node = ThrowStmt { throwable: Some(Box::new(Node::ident("e"))), ..Default::default() }.into();
        assert_eq!(text(&tree), "throw e;");
    }

    #[test]
    fn assert_with_message() {
        let tree: Node = AssertStmt {
            assertion: Some(Box::new(Node::ident("ok"))),
            message: Some(Box::new(Node::string("bad"))),
            ..Default::default()
        }
        .into();
        assert_eq!(text(&tree), "assert ok : \"bad\";");
    }

    #[test]
    fn constructor_calls() {
        let sup: Node = SuperCtorCall { arguments: vec![Node::ident("a")], ..Default::default() }.into();
        assert_eq!(text(&sup), "super(a);");
        let this: Node = ThisCtorCall::default().into();
        assert_eq!(text(&this), "this();");
    }
}
