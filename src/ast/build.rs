//! Shorthand constructors for assembling trees in code.

use super::nodes::*;
use super::Node;

pub(crate) fn boxed(node: impl Into<Node>) -> Child {
    Some(Box::new(node.into()))
}

impl Node {
    pub fn ident(name: &str) -> Node {
        Identifier::of(name).into()
    }

    /// Type reference from a dotted name, e.g. `java.util.List`
    pub fn type_ref(dotted: &str) -> Node {
        let parts = dotted
            .split('.')
            .map(|part| TypeRefPart { identifier: boxed(Identifier::of(part)), ..Default::default() }.into())
            .collect();
        TypeRef { parts, ..Default::default() }.into()
    }

    pub fn int(raw: &str) -> Node {
        IntegralLiteral::from_raw(raw).into()
    }

    pub fn float(raw: &str) -> Node {
        FloatingPointLiteral::from_raw(raw).into()
    }

    pub fn boolean(value: bool) -> Node {
        BooleanLiteral::of(value).into()
    }

    pub fn string(value: &str) -> Node {
        StringLiteral::of(value).into()
    }

    pub fn null() -> Node {
        NullLiteral::default().into()
    }

    /// Binary expression; an unknown symbol is kept and recorded as a problem
    pub fn binary(left: Node, op: &str, right: Node) -> Node {
        let mut expr = BinaryExpr {
            left: boxed(left),
            raw_operator: Some(op.to_string()),
            right: boxed(right),
            ..Default::default()
        };
        expr.problem = expr.operator().err().map(|e| e.to_string());
        expr.into()
    }

    pub fn unary(op: &str, postfix: bool, operand: Node) -> Node {
        let mut expr = UnaryExpr {
            raw_operator: Some(op.to_string()),
            postfix,
            operand: boxed(operand),
            ..Default::default()
        };
        expr.problem = expr.operator().err().map(|e| e.to_string());
        expr.into()
    }

    /// Mark the expression as written inside one more pair of parentheses
    pub fn parenthesized(mut self) -> Node {
        match &mut self {
            Node::BinaryExpression(n) => n.explicit_parens += 1,
            Node::UnaryExpression(n) => n.explicit_parens += 1,
            Node::Cast(n) => n.explicit_parens += 1,
            Node::InlineIfExpression(n) => n.explicit_parens += 1,
            Node::InstanceOf(n) => n.explicit_parens += 1,
            _ => {}
        }
        self
    }

    pub fn select(operand: Node, name: &str) -> Node {
        SelectExpr { operand: boxed(operand), identifier: boxed(Identifier::of(name)), ..Default::default() }.into()
    }

    pub fn call(operand: Option<Node>, name: &str, arguments: Vec<Node>) -> Node {
        MethodCallExpr {
            operand: operand.map(Box::new),
            name: boxed(Identifier::of(name)),
            arguments,
            ..Default::default()
        }
        .into()
    }

    pub fn expr_stmt(expression: Node) -> Node {
        ExprStmt { expression: boxed(expression), ..Default::default() }.into()
    }

    pub fn block(contents: Vec<Node>) -> Node {
        Block { contents, ..Default::default() }.into()
    }

    pub fn ret(value: Option<Node>) -> Node {
        ReturnStmt { value: value.map(Box::new), ..Default::default() }.into()
    }

    pub fn modifiers(keywords: &[&str]) -> Node {
        let keywords = keywords.iter().map(|k| KeywordModifier::of(*k).into()).collect();
        Modifiers { keywords, ..Default::default() }.into()
    }

    /// Single-variable definition such as `int x = 1`
    pub fn var_def(type_name: &str, name: &str, initializer: Option<Node>) -> Node {
        let entry = VarDefEntry {
            name: boxed(Identifier::of(name)),
            initializer: initializer.map(Box::new),
            ..Default::default()
        };
        VarDef {
            modifiers: boxed(Modifiers::default()),
            type_ref: boxed(Node::type_ref(type_name)),
            variables: vec![entry.into()],
            ..Default::default()
        }
        .into()
    }

    /// Local variable declaration statement wrapping [`Node::var_def`]
    pub fn local(type_name: &str, name: &str, initializer: Option<Node>) -> Node {
        VarDeclStmt { definition: boxed(Node::var_def(type_name, name, initializer)), ..Default::default() }.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstNode, NodeKind};

    #[test]
    fn dotted_type_reference() {
        let Node::TypeReference(t) = Node::type_ref("java.util.List") else { panic!("not a type reference") };
        assert_eq!(t.parts.len(), 3);
        assert!(t.parts.iter().all(|p| p.kind() == NodeKind::TypeReferencePart));
    }

    #[test]
    fn unknown_operator_is_recorded() {
        assert!(Node::binary(Node::ident("a"), "+", Node::ident("b")).is_syntactically_valid());
        assert!(!Node::binary(Node::ident("a"), "<>", Node::ident("b")).is_syntactically_valid());
        assert!(!Node::unary("!", true, Node::ident("b")).is_syntactically_valid());
    }

    #[test]
    fn parenthesized_counts_layers() {
        let expr = Node::binary(Node::ident("a"), "+", Node::ident("b")).parenthesized().parenthesized();
        let Node::BinaryExpression(b) = expr else { panic!("not binary") };
        assert_eq!(b.explicit_parens, 2);
    }
}
