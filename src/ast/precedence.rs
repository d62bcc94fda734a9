//! Computes the `needs_parens` flag of expression nodes.
//!
//! Each expression slot has a minimum binding strength; a child binding
//! looser than its slot requires is wrapped. Parentheses written in the source
//! (`explicit_parens > 0`) are always kept.
//!
//! The pass stops descending at the same nesting limit the printer uses;
//! subtrees below it keep their flags untouched.

use super::operators::level;
use super::walk::for_each_child_mut;
use super::Node;
use crate::config::Config;

/// Binding strength of an expression node; non-operator nodes are primary
pub fn precedence(node: &Node) -> u8 {
    match node {
        // An operator that cannot be resolved binds loosest, so it is always wrapped
        Node::BinaryExpression(b) => b.operator().map_or(1, |op| op.precedence()),
        Node::UnaryExpression(u) => u.operator().map_or(1, |op| op.precedence()),
        Node::Cast(_) => level::PREFIX,
        Node::InlineIfExpression(_) => level::TERNARY,
        Node::InstanceOf(_) => level::RELATIONAL,
        _ => level::PRIMARY,
    }
}

fn parens_mut(node: &mut Node) -> Option<(&mut bool, u32)> {
    match node {
        Node::BinaryExpression(n) => Some((&mut n.needs_parens, n.explicit_parens)),
        Node::UnaryExpression(n) => Some((&mut n.needs_parens, n.explicit_parens)),
        Node::Cast(n) => Some((&mut n.needs_parens, n.explicit_parens)),
        Node::InlineIfExpression(n) => Some((&mut n.needs_parens, n.explicit_parens)),
        Node::InstanceOf(n) => Some((&mut n.needs_parens, n.explicit_parens)),
        _ => None,
    }
}

fn reset(node: &mut Node) {
    if let Some((flag, explicit)) = parens_mut(node) {
        *flag = explicit > 0;
    }
}

fn require(slot: &mut Option<Box<Node>>, min: u8) {
    let Some(child) = slot.as_deref_mut() else { return };
    let loose = precedence(child) < min;
    if let Some((flag, _)) = parens_mut(child) {
        *flag |= loose;
    }
}

fn force(slot: &mut Option<Box<Node>>) {
    if let Some((flag, _)) = slot.as_deref_mut().and_then(parens_mut) {
        *flag = true;
    }
}

/// `- -a` must not print as `--a`
fn glues_to(symbol: &str, operand: Option<&Node>) -> bool {
    let Some(Node::UnaryExpression(inner)) = operand else { return false };
    match inner.operator() {
        Ok(op) if !op.is_postfix() => symbol.chars().next() == op.symbol().chars().next(),
        _ => false,
    }
}

fn visit(node: &mut Node, depth: usize, max_depth: usize) {
    if depth >= max_depth {
        log::trace!("parenthesization stopped at depth {}", depth);
        return;
    }
    for_each_child_mut(node, reset);

    match node {
        Node::BinaryExpression(b) => {
            if let Ok(op) = b.operator() {
                let p = op.precedence();
                if op.is_assignment() {
                    require(&mut b.left, p + 1);
                    require(&mut b.right, p);
                } else {
                    require(&mut b.left, p);
                    require(&mut b.right, p + 1);
                }
            } else {
                require(&mut b.left, level::PRIMARY);
                require(&mut b.right, level::PRIMARY);
            }
        }
        Node::UnaryExpression(u) => match u.operator() {
            Ok(op) if op.is_postfix() => require(&mut u.operand, level::POSTFIX),
            Ok(op) => {
                require(&mut u.operand, level::PREFIX);
                if matches!(op.symbol(), "+" | "-") && glues_to(op.symbol(), u.operand.as_deref()) {
                    force(&mut u.operand);
                }
            }
            Err(_) => require(&mut u.operand, level::PRIMARY),
        },
        Node::Cast(c) => require(&mut c.operand, level::PREFIX),
        Node::InlineIfExpression(t) => {
            require(&mut t.condition, level::TERNARY + 1);
            require(&mut t.if_true, level::ASSIGNMENT);
            require(&mut t.if_false, level::TERNARY);
        }
        Node::InstanceOf(i) => require(&mut i.operand, level::RELATIONAL),
        Node::Select(s) => require(&mut s.operand, level::PRIMARY),
        Node::MethodInvocation(m) => require(&mut m.operand, level::PRIMARY),
        Node::ArrayAccess(a) => require(&mut a.operand, level::PRIMARY),
        _ => {}
    }

    for_each_child_mut(node, |child| visit(child, depth + 1, max_depth));
}

/// Recompute `needs_parens` for every expression in the tree rooted at `root`
pub fn assign_parentheses(root: &mut Node) {
    assign_parentheses_with(root, &Config::default());
}

/// Like [`assign_parentheses`], bounded by `config.max_depth`
pub fn assign_parentheses_with(root: &mut Node, config: &Config) {
    reset(root);
    visit(root, 0, config.max_depth);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(node: &Node) -> bool {
        match node {
            Node::BinaryExpression(n) => n.needs_parens,
            Node::UnaryExpression(n) => n.needs_parens,
            Node::Cast(n) => n.needs_parens,
            Node::InlineIfExpression(n) => n.needs_parens,
            Node::InstanceOf(n) => n.needs_parens,
            _ => false,
        }
    }

    fn sides(node: &Node) -> (&Node, &Node) {
        let Node::BinaryExpression(b) = node else { panic!("not binary") };
        (b.left.as_deref().unwrap(), b.right.as_deref().unwrap())
    }

    fn id(name: &str) -> Node {
        Node::ident(name)
    }

    #[test]
    fn lower_precedence_left_operand_is_wrapped() {
        let mut tree = Node::binary(Node::binary(id("a"), "+", id("b")), "*", id("c"));
        assign_parentheses(&mut tree);
        assert!(!flag(&tree));
        assert!(flag(sides(&tree).0));
    }

    #[test]
    fn tighter_right_operand_is_not_wrapped() {
        let mut tree = Node::binary(id("a"), "+", Node::binary(id("b"), "*", id("c")));
        assign_parentheses(&mut tree);
        assert!(!flag(sides(&tree).1));
    }

    #[test]
    fn left_associativity() {
        let mut right_nested = Node::binary(id("a"), "-", Node::binary(id("b"), "-", id("c")));
        assign_parentheses(&mut right_nested);
        assert!(flag(sides(&right_nested).1));

        let mut left_nested = Node::binary(Node::binary(id("a"), "-", id("b")), "-", id("c"));
        assign_parentheses(&mut left_nested);
        assert!(!flag(sides(&left_nested).0));
    }

    #[test]
    fn assignment_is_right_associative() {
        let mut chain = Node::binary(id("a"), "=", Node::binary(id("b"), "=", id("c")));
        assign_parentheses(&mut chain);
        assert!(!flag(sides(&chain).1));

        let mut odd = Node::binary(Node::binary(id("a"), "=", id("b")), "=", id("c"));
        assign_parentheses(&mut odd);
        assert!(flag(sides(&odd).0));
    }

    #[test]
    fn explicit_parentheses_survive() {
        let mut tree = Node::binary(id("a"), "+", Node::binary(id("b"), "*", id("c")).parenthesized());
        assign_parentheses(&mut tree);
        assert!(flag(sides(&tree).1));
    }

    #[test]
    fn stale_flags_are_cleared() {
        let mut tree = Node::binary(id("a"), "+", Node::binary(id("b"), "*", id("c")));
        if let Node::BinaryExpression(b) = &mut tree {
            if let Some(Node::BinaryExpression(inner)) = b.right.as_deref_mut() {
                inner.needs_parens = true;
            }
        }
        assign_parentheses(&mut tree);
        assert!(!flag(sides(&tree).1));
    }

    #[test]
    fn member_access_operand_is_primary() {
        let mut tree = Node::call(Some(Node::binary(id("a"), "+", id("b"))), "foo", vec![]);
        assign_parentheses(&mut tree);
        let Node::MethodInvocation(m) = &tree else { panic!("not a call") };
        assert!(flag(m.operand.as_deref().unwrap()));
    }

    #[test]
    fn descent_stops_at_the_nesting_limit() {
        let inner = Node::binary(Node::binary(id("a"), "+", id("b")), "*", id("c"));
        let mut tree = Node::binary(id("x"), "-", Node::binary(id("y"), "-", inner));
        let config = Config::new().with_max_depth(2).unwrap();
        assign_parentheses_with(&mut tree, &config);
        let (_, middle) = sides(&tree);
        assert!(flag(middle));
        let (_, deepest) = sides(middle);
        assert!(!flag(sides(deepest).0));
    }

    #[test]
    fn prefix_signs_do_not_glue() {
        let mut tree = Node::unary("-", false, Node::unary("-", false, id("a")));
        assign_parentheses(&mut tree);
        let Node::UnaryExpression(u) = &tree else { panic!("not unary") };
        assert!(flag(u.operand.as_deref().unwrap()));

        let mut mixed = Node::unary("-", false, Node::unary("!", false, id("a")));
        assign_parentheses(&mut mixed);
        let Node::UnaryExpression(u) = &mixed else { panic!("not unary") };
        assert!(!flag(u.operand.as_deref().unwrap()));
    }
}
