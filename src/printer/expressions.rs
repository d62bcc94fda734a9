use super::Walker;
use crate::ast::{
    ArrayAccessExpr, ArrayCreationExpr, ArrayDimension, ArrayInitializer, AstNode, BinaryExpr, CastExpr,
    ClassLiteral, InlineIfExpr, InstanceOfExpr, MethodCallExpr, NewExpr, Node, SelectExpr, UnaryExpr,
};
use crate::layout::LayoutSink;

impl<'a, L: LayoutSink + ?Sized> Walker<'a, L> {
    pub(super) fn binary(&mut self, n: &BinaryExpr) {
        self.inline(n, |w| {
            w.parens(n.needs_parens, |w| {
                w.visit(n.left.as_deref());
                w.layout.space();
                match (n.operator(), n.raw_operator.as_deref()) {
                    (Ok(op), _) => w.layout.operator(op.symbol()),
                    (Err(_), Some(raw)) => w.layout.operator(raw),
                    (Err(_), None) => w.layout.fail("MISSING_OPERATOR"),
                }
                w.layout.space();
                w.visit(n.right.as_deref());
            });
        });
    }

    /// An unresolvable operator is dropped and only the operand is printed
    pub(super) fn unary(&mut self, n: &UnaryExpr) {
        self.inline(n, |w| {
            let op = match n.operator() {
                Ok(op) => op,
                Err(e) => {
                    log::trace!("dropping unary operator: {}", e);
                    w.visit(n.operand.as_deref());
                    return;
                }
            };
            w.parens(n.needs_parens, |w| {
                if !op.is_postfix() {
                    w.layout.operator(op.symbol());
                }
                w.visit(n.operand.as_deref());
                if op.is_postfix() {
                    w.layout.operator(op.symbol());
                }
            });
        });
    }

    pub(super) fn cast(&mut self, n: &CastExpr) {
        self.inline(n, |w| {
            w.parens(n.needs_parens, |w| {
                w.layout.append("(");
                w.visit(n.type_ref.as_deref());
                w.layout.append(")");
                w.layout.space();
                w.visit(n.operand.as_deref());
            });
        });
    }

    pub(super) fn inline_if(&mut self, n: &InlineIfExpr) {
        self.inline(n, |w| {
            w.parens(n.needs_parens, |w| {
                w.visit(n.condition.as_deref());
                w.layout.space();
                w.layout.operator("?");
                w.layout.space();
                w.visit(n.if_true.as_deref());
                w.layout.space();
                w.layout.operator(":");
                w.layout.space();
                w.visit(n.if_false.as_deref());
            });
        });
    }

    pub(super) fn instance_of(&mut self, n: &InstanceOfExpr) {
        self.inline(n, |w| {
            w.parens(n.needs_parens, |w| {
                w.visit(n.operand.as_deref());
                w.layout.space();
                w.layout.keyword("instanceof");
                w.layout.space();
                w.visit(n.type_ref.as_deref());
            });
        });
    }

    pub(super) fn constructor_invocation(&mut self, n: &NewExpr) {
        self.inline(n, |w| {
            w.qualifier(n.qualifier.as_deref());
            w.layout.keyword("new");
            w.layout.space();
            w.visit(n.type_arguments.as_deref());
            w.visit(n.type_ref.as_deref());
            w.layout.append("(");
            w.list(&n.arguments, ", ", "", "");
            w.layout.append(")");
            if n.anonymous_body.is_some() {
                w.layout.space();
                w.suppressed(n.anonymous_body.as_deref());
            }
        });
    }

    pub(super) fn method_invocation(&mut self, n: &MethodCallExpr) {
        self.inline(n, |w| {
            w.qualifier(n.operand.as_deref());
            w.visit(n.type_arguments.as_deref());
            w.visit(n.name.as_deref());
            w.layout.append("(");
            w.list(&n.arguments, ", ", "", "");
            w.layout.append(")");
        });
    }

    pub(super) fn select(&mut self, n: &SelectExpr) {
        self.inline(n, |w| {
            w.qualifier(n.operand.as_deref());
            w.visit(n.identifier.as_deref());
        });
    }

    pub(super) fn array_access(&mut self, n: &ArrayAccessExpr) {
        self.inline(n, |w| {
            w.visit(n.operand.as_deref());
            w.layout.append("[");
            w.visit(n.index.as_deref());
            w.layout.append("]");
        });
    }

    pub(super) fn array_creation(&mut self, n: &ArrayCreationExpr) {
        self.inline(n, |w| {
            w.layout.keyword("new");
            w.layout.space();
            w.visit(n.component_type.as_deref());
            w.list(&n.dimensions, "", "", "");
            if n.initializer.is_some() {
                w.layout.space();
                w.visit(n.initializer.as_deref());
            }
        });
    }

    pub(super) fn array_dimension(&mut self, n: &ArrayDimension) {
        self.inline(n, |w| {
            w.layout.append("[");
            w.visit(n.dimension.as_deref());
            w.layout.append("]");
        });
    }

    pub(super) fn array_initializer(&mut self, n: &ArrayInitializer) {
        self.inline(n, |w| {
            w.layout.append("{");
            w.list(&n.expressions, ", ", "", "");
            w.layout.append("}");
        });
    }

    pub(super) fn class_literal(&mut self, n: &ClassLiteral) {
        self.inline(n, |w| {
            w.visit(n.type_ref.as_deref());
            w.layout.append(".");
            w.layout.keyword("class");
        });
    }

    /// `this`, `super` and their qualified forms such as `Outer.this`
    pub(super) fn qualified_keyword(&mut self, n: &dyn AstNode, qualifier: Option<&Node>, keyword: &str) {
        self.inline(n, |w| {
            w.qualifier(qualifier);
            w.layout.keyword(keyword);
        });
    }
}
