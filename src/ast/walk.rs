//! Generic child traversal over [`Node`].

use super::Node;

fn each<F: FnMut(&mut Node)>(slot: &mut Option<Box<Node>>, f: &mut F) {
    if let Some(node) = slot.as_deref_mut() {
        f(node);
    }
}

fn each_of<F: FnMut(&mut Node)>(list: &mut [Node], f: &mut F) {
    for node in list {
        f(node);
    }
}

/// Call `f` on every direct child of `node`, in source order
pub fn for_each_child_mut<F: FnMut(&mut Node)>(node: &mut Node, mut f: F) {
    let f = &mut f;
    match node {
        Node::Identifier(_)
        | Node::KeywordModifier(_)
        | Node::Comment(_)
        | Node::IntegralLiteral(_)
        | Node::FloatingPointLiteral(_)
        | Node::BooleanLiteral(_)
        | Node::CharLiteral(_)
        | Node::StringLiteral(_)
        | Node::NullLiteral(_)
        | Node::Default(_)
        | Node::EmptyStatement(_)
        | Node::ParseArtifact(_)
        | Node::Unsupported(_) => {}

        Node::TypeReference(n) => each_of(&mut n.parts, f),
        Node::TypeReferencePart(n) => {
            each(&mut n.identifier, f);
            each(&mut n.type_arguments, f);
        }
        Node::TypeArguments(n) => each_of(&mut n.generics, f),
        Node::TypeVariable(n) => {
            each(&mut n.name, f);
            each_of(&mut n.extending, f);
        }
        Node::Modifiers(n) => {
            each_of(&mut n.annotations, f);
            each_of(&mut n.keywords, f);
        }
        Node::Annotation(n) => {
            each(&mut n.annotation_type, f);
            each_of(&mut n.elements, f);
        }
        Node::AnnotationElement(n) => {
            each(&mut n.name, f);
            each(&mut n.value, f);
        }
        Node::VariableDefinition(n) => {
            each(&mut n.modifiers, f);
            each(&mut n.type_ref, f);
            each_of(&mut n.variables, f);
        }
        Node::VariableDefinitionEntry(n) => {
            each(&mut n.name, f);
            each(&mut n.initializer, f);
        }

        Node::BinaryExpression(n) => {
            each(&mut n.left, f);
            each(&mut n.right, f);
        }
        Node::UnaryExpression(n) => each(&mut n.operand, f),
        Node::Cast(n) => {
            each(&mut n.type_ref, f);
            each(&mut n.operand, f);
        }
        Node::InlineIfExpression(n) => {
            each(&mut n.condition, f);
            each(&mut n.if_true, f);
            each(&mut n.if_false, f);
        }
        Node::InstanceOf(n) => {
            each(&mut n.operand, f);
            each(&mut n.type_ref, f);
        }
        Node::ConstructorInvocation(n) => {
            each(&mut n.qualifier, f);
            each(&mut n.type_arguments, f);
            each(&mut n.type_ref, f);
            each_of(&mut n.arguments, f);
            each(&mut n.anonymous_body, f);
        }
        Node::MethodInvocation(n) => {
            each(&mut n.operand, f);
            each(&mut n.type_arguments, f);
            each(&mut n.name, f);
            each_of(&mut n.arguments, f);
        }
        Node::Select(n) => {
            each(&mut n.operand, f);
            each(&mut n.identifier, f);
        }
        Node::ArrayAccess(n) => {
            each(&mut n.operand, f);
            each(&mut n.index, f);
        }
        Node::ArrayCreation(n) => {
            each(&mut n.component_type, f);
            each_of(&mut n.dimensions, f);
            each(&mut n.initializer, f);
        }
        Node::ArrayDimension(n) => each(&mut n.dimension, f),
        Node::ArrayInitializer(n) => each_of(&mut n.expressions, f),
        Node::ClassLiteral(n) => each(&mut n.type_ref, f),
        Node::Super(n) => each(&mut n.qualifier, f),
        Node::This(n) => each(&mut n.qualifier, f),

        Node::ExpressionStatement(n) => each(&mut n.expression, f),
        Node::LabelledStatement(n) => {
            each(&mut n.label, f);
            each(&mut n.statement, f);
        }
        Node::If(n) => {
            each(&mut n.condition, f);
            each(&mut n.statement, f);
            each(&mut n.else_statement, f);
        }
        Node::For(n) => {
            each_of(&mut n.inits, f);
            each(&mut n.condition, f);
            each_of(&mut n.updates, f);
            each(&mut n.statement, f);
        }
        Node::ForEach(n) => {
            each(&mut n.variable, f);
            each(&mut n.iterable, f);
            each(&mut n.statement, f);
        }
        Node::While(n) => {
            each(&mut n.condition, f);
            each(&mut n.statement, f);
        }
        Node::DoWhile(n) => {
            each(&mut n.statement, f);
            each(&mut n.condition, f);
        }
        Node::Try(n) => {
            each(&mut n.body, f);
            each_of(&mut n.catches, f);
            each(&mut n.finally, f);
        }
        Node::Catch(n) => {
            each(&mut n.exception_declaration, f);
            each(&mut n.body, f);
        }
        Node::Switch(n) => {
            each(&mut n.condition, f);
            each(&mut n.body, f);
        }
        Node::Case(n) => each(&mut n.condition, f),
        Node::Break(n) => each(&mut n.label, f),
        Node::Continue(n) => each(&mut n.label, f),
        Node::Return(n) => each(&mut n.value, f),
        Node::Throw(n) => each(&mut n.throwable, f),
        Node::Assert(n) => {
            each(&mut n.assertion, f);
            each(&mut n.message, f);
        }
        Node::Synchronized(n) => {
            each(&mut n.lock, f);
            each(&mut n.body, f);
        }
        Node::Block(n) => each_of(&mut n.contents, f),
        Node::VariableDeclaration(n) => each(&mut n.definition, f),
        Node::SuperConstructorInvocation(n) => {
            each(&mut n.qualifier, f);
            each(&mut n.type_arguments, f);
            each_of(&mut n.arguments, f);
        }
        Node::AlternateConstructorInvocation(n) => {
            each(&mut n.type_arguments, f);
            each_of(&mut n.arguments, f);
        }

        Node::CompilationUnit(n) => {
            each(&mut n.package, f);
            each_of(&mut n.imports, f);
            each_of(&mut n.type_decls, f);
        }
        Node::PackageDeclaration(n) => {
            each_of(&mut n.annotations, f);
            each_of(&mut n.parts, f);
        }
        Node::ImportDeclaration(n) => each_of(&mut n.parts, f),
        Node::ClassDeclaration(n) => {
            each(&mut n.modifiers, f);
            each(&mut n.name, f);
            each_of(&mut n.type_variables, f);
            each(&mut n.extending, f);
            each_of(&mut n.implementing, f);
            each(&mut n.body, f);
        }
        Node::InterfaceDeclaration(n) => {
            each(&mut n.modifiers, f);
            each(&mut n.name, f);
            each_of(&mut n.type_variables, f);
            each_of(&mut n.extending, f);
            each(&mut n.body, f);
        }
        Node::EnumDeclaration(n) => {
            each(&mut n.modifiers, f);
            each(&mut n.name, f);
            each_of(&mut n.implementing, f);
            each_of(&mut n.constants, f);
            each(&mut n.body, f);
        }
        Node::EnumConstant(n) => {
            each_of(&mut n.annotations, f);
            each(&mut n.name, f);
            each_of(&mut n.arguments, f);
            each(&mut n.body, f);
        }
        Node::AnnotationDeclaration(n) => {
            each(&mut n.modifiers, f);
            each(&mut n.name, f);
            each(&mut n.body, f);
        }
        Node::AnnotationMethodDeclaration(n) => {
            each(&mut n.modifiers, f);
            each(&mut n.return_type, f);
            each(&mut n.name, f);
            each(&mut n.default_value, f);
        }
        Node::MethodDeclaration(n) => {
            each(&mut n.modifiers, f);
            each_of(&mut n.type_variables, f);
            each(&mut n.return_type, f);
            each(&mut n.name, f);
            each_of(&mut n.parameters, f);
            each_of(&mut n.thrown_types, f);
            each(&mut n.body, f);
        }
        Node::ConstructorDeclaration(n) => {
            each(&mut n.modifiers, f);
            each_of(&mut n.type_variables, f);
            each(&mut n.type_name, f);
            each_of(&mut n.parameters, f);
            each_of(&mut n.thrown_types, f);
            each(&mut n.body, f);
        }
        Node::InstanceInitializer(n) => each(&mut n.body, f),
        Node::StaticInitializer(n) => each(&mut n.body, f),
        Node::TypeBody(n) => each_of(&mut n.members, f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(node: &mut Node) -> usize {
        let mut total = 1;
        for_each_child_mut(node, |child| total += count(child));
        total
    }

    #[test]
    fn visits_every_child_once() {
        let mut tree = Node::expr_stmt(Node::binary(Node::ident("a"), "+", Node::call(None, "f", vec![Node::int("1")])));
        // statement, binary, a, call, f, 1
        assert_eq!(count(&mut tree), 6);
    }
}
