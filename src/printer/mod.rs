//! Source printer: renders a (possibly malformed) tree through a [`LayoutSink`].
//!
//! Every node kind has one rendering rule, selected by an exhaustive match in
//! [`Walker::dispatch`]. Malformed nodes never stop the walk: local damage
//! becomes an in-band failure marker and nodes that claim validity while being
//! malformed are reported out of band.

pub mod canon;
mod declarations;
mod expressions;
mod statements;

use crate::ast::{
    identifier_fault, Annotation, AnnotationElement, AstNode, Comment, Identifier, IdentifierFault, KeywordModifier,
    Modifiers, Node, TypeArgs, TypeRef, TypeRefPart, TypeVar, VarDef, VarDefEntry, WildcardKind,
};
use crate::config::Config;
use crate::layout::LayoutSink;
use canon::RoundTrip;

/// Reusable printer; holds configuration only
#[derive(Debug, Clone)]
pub struct SourcePrinter {
    max_depth: usize,
}

impl Default for SourcePrinter {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl SourcePrinter {
    pub fn new(config: &Config) -> Self {
        Self { max_depth: config.max_depth }
    }

    /// Print `node` into `layout`; an absent node prints nothing
    pub fn print<L: LayoutSink + ?Sized>(&self, node: Option<&Node>, layout: &mut L) {
        if let Some(root) = node {
            log::debug!("printing {} at {}", root.kind(), root.span());
        }
        let mut walker = Walker { layout, depth: 0, max_depth: self.max_depth };
        walker.visit(node);
        log::debug!("printing finished");
    }
}

/// Per-call traversal state
pub(crate) struct Walker<'a, L: LayoutSink + ?Sized> {
    layout: &'a mut L,
    depth: usize,
    max_depth: usize,
}

impl<'a, L: LayoutSink + ?Sized> Walker<'a, L> {
    fn visit(&mut self, node: Option<&Node>) {
        let Some(node) = node else { return };
        if self.depth >= self.max_depth {
            log::trace!("nesting limit reached at {}", node.kind());
            self.inline(node, |w| w.layout.fail("NESTING_TOO_DEEP"));
            return;
        }
        self.depth += 1;
        self.dispatch(node);
        self.depth -= 1;
    }

    fn dispatch(&mut self, node: &Node) {
        match node {
            Node::Identifier(n) => self.identifier(n),
            Node::TypeReference(n) => self.type_reference(n),
            Node::TypeReferencePart(n) => self.type_reference_part(n),
            Node::TypeArguments(n) => self.type_arguments(n),
            Node::TypeVariable(n) => self.type_variable(n),
            Node::KeywordModifier(n) => self.keyword_modifier(n),
            Node::Modifiers(n) => self.modifiers(n),
            Node::Annotation(n) => self.annotation(n),
            Node::AnnotationElement(n) => self.annotation_element(n),
            Node::VariableDefinition(n) => self.variable_definition(n),
            Node::VariableDefinitionEntry(n) => self.variable_definition_entry(n),
            Node::Comment(n) => self.comment(n),

            Node::IntegralLiteral(n) => self.literal(n),
            Node::FloatingPointLiteral(n) => self.literal(n),
            Node::BooleanLiteral(n) => self.literal(n),
            Node::CharLiteral(n) => self.literal(n),
            Node::StringLiteral(n) => self.literal(n),
            Node::NullLiteral(n) => self.inline(n, |w| w.layout.keyword("null")),

            Node::BinaryExpression(n) => self.binary(n),
            Node::UnaryExpression(n) => self.unary(n),
            Node::Cast(n) => self.cast(n),
            Node::InlineIfExpression(n) => self.inline_if(n),
            Node::InstanceOf(n) => self.instance_of(n),
            Node::ConstructorInvocation(n) => self.constructor_invocation(n),
            Node::MethodInvocation(n) => self.method_invocation(n),
            Node::Select(n) => self.select(n),
            Node::ArrayAccess(n) => self.array_access(n),
            Node::ArrayCreation(n) => self.array_creation(n),
            Node::ArrayDimension(n) => self.array_dimension(n),
            Node::ArrayInitializer(n) => self.array_initializer(n),
            Node::ClassLiteral(n) => self.class_literal(n),
            Node::Super(n) => self.qualified_keyword(n, n.qualifier.as_deref(), "super"),
            Node::This(n) => self.qualified_keyword(n, n.qualifier.as_deref(), "this"),

            Node::ExpressionStatement(n) => self.expression_statement(n),
            Node::LabelledStatement(n) => self.labelled_statement(n),
            Node::If(n) => self.if_statement(n),
            Node::For(n) => self.for_statement(n),
            Node::ForEach(n) => self.for_each(n),
            Node::While(n) => self.while_statement(n),
            Node::DoWhile(n) => self.do_while(n),
            Node::Try(n) => self.try_statement(n),
            Node::Catch(n) => self.catch_clause(n),
            Node::Switch(n) => self.switch_statement(n),
            Node::Case(n) => self.case_label(n),
            Node::Default(n) => self.default_label(n),
            Node::Break(n) => self.jump(n, "break", n.label.as_deref()),
            Node::Continue(n) => self.jump(n, "continue", n.label.as_deref()),
            Node::Return(n) => self.jump(n, "return", n.value.as_deref()),
            Node::Throw(n) => self.jump(n, "throw", n.throwable.as_deref()),
            Node::Assert(n) => self.assert_statement(n),
            Node::Synchronized(n) => self.synchronized(n),
            Node::EmptyStatement(n) => self.block(n, |w| w.layout.append(";")),
            Node::Block(n) => self.block_statement(n),
            Node::VariableDeclaration(n) => self.variable_declaration(n),
            Node::SuperConstructorInvocation(n) => self.super_constructor_invocation(n),
            Node::AlternateConstructorInvocation(n) => self.alternate_constructor_invocation(n),

            Node::CompilationUnit(n) => self.compilation_unit(n),
            Node::PackageDeclaration(n) => self.package_declaration(n),
            Node::ImportDeclaration(n) => self.import_declaration(n),
            Node::ClassDeclaration(n) => self.class_declaration(n),
            Node::InterfaceDeclaration(n) => self.interface_declaration(n),
            Node::EnumDeclaration(n) => self.enum_declaration(n),
            Node::EnumConstant(n) => self.enum_constant(n),
            Node::AnnotationDeclaration(n) => self.annotation_declaration(n),
            Node::AnnotationMethodDeclaration(n) => self.annotation_method_declaration(n),
            Node::MethodDeclaration(n) => self.method_declaration(n),
            Node::ConstructorDeclaration(n) => self.constructor_declaration(n),
            Node::InstanceInitializer(n) => self.block(n, |w| w.suppressed(n.body.as_deref())),
            Node::StaticInitializer(n) => self.block(n, |w| {
                w.layout.keyword("static");
                w.layout.space();
                w.suppressed(n.body.as_deref());
            }),
            Node::TypeBody(n) => self.type_body(n, &[]),

            Node::ParseArtifact(n) => {
                log::trace!("parse artefact {}", n.kind_name);
                self.inline(n, |w| w.layout.fail(&format!("ARTEFACT: {}", n.kind_name)));
            }
            Node::Unsupported(n) => {
                log::trace!("no rendering rule for {}", n.kind_name);
                self.block(n, |w| w.layout.fail(&format!("NOT_IMPLEMENTED: {}", n.kind_name)));
            }
        }
    }

    // Scoped helpers: every open is paired with its close

    fn block(&mut self, node: &dyn AstNode, body: impl FnOnce(&mut Self)) {
        self.layout.open_block(Some(node));
        body(self);
        self.layout.close_block();
    }

    fn anon_block(&mut self, body: impl FnOnce(&mut Self)) {
        self.layout.open_block(None);
        body(self);
        self.layout.close_block();
    }

    fn inline(&mut self, node: &dyn AstNode, body: impl FnOnce(&mut Self)) {
        self.layout.open_inline(Some(node));
        body(self);
        self.layout.close_inline();
    }

    /// Print a body whose braces come from the body itself, if it is a block
    fn suppressed(&mut self, body: Option<&Node>) {
        self.layout.start_suppress_block();
        self.visit(body);
        self.layout.end_suppress_block();
    }

    fn parens(&mut self, wrap: bool, body: impl FnOnce(&mut Self)) {
        if wrap {
            self.layout.append("(");
        }
        body(self);
        if wrap {
            self.layout.append(")");
        }
    }

    fn text(&mut self, text: &str) {
        match text {
            " " => self.layout.space(),
            "\n" => self.layout.vertical_space(),
            _ => self.layout.append(text),
        }
    }

    /// Items joined by `separator`; an empty list prints nothing, not even `prefix`/`suffix`
    fn list(&mut self, items: &[Node], separator: &str, prefix: &str, suffix: &str) {
        if items.is_empty() {
            return;
        }
        self.text(prefix);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.text(separator);
            }
            self.visit(Some(item));
        }
        self.text(suffix);
    }

    /// `operand.` when an operand is present
    fn qualifier(&mut self, operand: Option<&Node>) {
        if operand.is_some() {
            self.visit(operand);
            self.layout.append(".");
        }
    }

    /// Modifiers of a declaration, followed by a space when keywords were printed
    fn leading_modifiers(&mut self, modifiers: Option<&Node>) {
        self.visit(modifiers);
        if let Some(Node::Modifiers(m)) = modifiers {
            if !m.keywords.is_empty() {
                self.layout.space();
            }
        }
    }

    // Basics

    fn identifier(&mut self, n: &Identifier) {
        let name = n.name.as_deref();
        let fault = identifier_fault(name);
        if n.is_syntactically_valid() {
            match fault {
                Some(IdentifierFault::Null | IdentifierFault::Empty) => self.layout.report_assertion_failure(
                    n,
                    "null or empty identifier that is nevertheless syntactically valid",
                    None,
                ),
                Some(IdentifierFault::IllegalCharacters) => self.layout.report_assertion_failure(
                    n,
                    "identifier name contains characters that aren't legal in an identifier",
                    None,
                ),
                None => {}
            }
        }

        self.inline(n, |w| match (fault, name) {
            (None, Some(name)) => w.layout.append(name),
            (Some(IdentifierFault::IllegalCharacters), Some(name)) => {
                w.layout.fail(&format!("INVALID_IDENTIFIER: {}", name))
            }
            (Some(IdentifierFault::Empty), _) => w.layout.fail("EMPTY_IDENTIFIER"),
            _ => w.layout.fail("NULL_IDENTIFIER"),
        });
    }

    /// Emit the literal's own raw text; check the value round trip on the side
    fn literal<T: RoundTrip>(&mut self, n: &T) {
        if n.is_syntactically_valid() {
            if let Err(e) = n.check_round_trip() {
                let message = format!(
                    "correct {} literal nevertheless does not survive a value round trip",
                    T::LABEL
                );
                self.layout.report_assertion_failure(n, &message, Some(&e));
            }
        }
        self.inline(n, |w| match n.raw_text() {
            Some(raw) => w.layout.append(raw),
            None => w.layout.fail("MISSING_LITERAL"),
        });
    }

    fn type_reference(&mut self, n: &TypeRef) {
        self.inline(n, |w| {
            match n.wildcard {
                WildcardKind::Unbound => {
                    w.layout.append("?");
                    return;
                }
                WildcardKind::Extends | WildcardKind::Super => {
                    w.layout.append("?");
                    w.layout.space();
                    w.layout.keyword(if n.wildcard == WildcardKind::Extends { "extends" } else { "super" });
                    w.layout.space();
                }
                WildcardKind::None => {}
            }
            w.list(&n.parts, ".", "", "");
            for _ in 0..n.array_dimensions {
                w.layout.append("[]");
            }
        });
    }

    fn type_reference_part(&mut self, n: &TypeRefPart) {
        self.inline(n, |w| {
            w.visit(n.identifier.as_deref());
            w.visit(n.type_arguments.as_deref());
        });
    }

    fn type_arguments(&mut self, n: &TypeArgs) {
        self.inline(n, |w| w.list(&n.generics, ", ", "<", ">"));
    }

    fn type_variable(&mut self, n: &TypeVar) {
        self.inline(n, |w| {
            w.visit(n.name.as_deref());
            if !n.extending.is_empty() {
                w.layout.space();
                w.layout.keyword("extends");
                w.list(&n.extending, " & ", " ", "");
            }
        });
    }

    fn keyword_modifier(&mut self, n: &KeywordModifier) {
        self.inline(n, |w| match n.name.as_deref() {
            Some(name) if !name.is_empty() => w.layout.keyword(name),
            _ => w.layout.fail("MISSING_MODIFIER"),
        });
    }

    fn modifiers(&mut self, n: &Modifiers) {
        self.inline(n, |w| {
            w.list(&n.annotations, "", "", "");
            w.list(&n.keywords, " ", "", "");
        });
    }

    fn annotation(&mut self, n: &Annotation) {
        self.inline(n, |w| {
            w.layout.append("@");
            w.visit(n.annotation_type.as_deref());
            w.list(&n.elements, ", ", "(", ")");
        });
    }

    fn annotation_element(&mut self, n: &AnnotationElement) {
        self.inline(n, |w| {
            if n.name.is_some() {
                w.visit(n.name.as_deref());
                w.layout.space();
                w.layout.operator("=");
                w.layout.space();
            }
            w.visit(n.value.as_deref());
        });
    }

    fn variable_definition(&mut self, n: &VarDef) {
        self.inline(n, |w| {
            w.leading_modifiers(n.modifiers.as_deref());
            w.visit(n.type_ref.as_deref());
            if n.varargs {
                w.layout.append("...");
            }
            w.layout.space();
            w.list(&n.variables, ", ", "", "");
        });
    }

    fn variable_definition_entry(&mut self, n: &VarDefEntry) {
        self.inline(n, |w| {
            w.visit(n.name.as_deref());
            for _ in 0..n.array_dimensions {
                w.layout.append("[]");
            }
            if n.initializer.is_some() {
                w.layout.space();
                w.layout.operator("=");
                w.layout.space();
                w.visit(n.initializer.as_deref());
            }
        });
    }

    fn comment(&mut self, n: &Comment) {
        self.block(n, |w| {
            w.layout.append(if n.block_comment { "/*" } else { "//" });
            match n.content.as_deref() {
                Some(content) => w.layout.append(content),
                None => w.layout.fail("MISSING_COMMENT"),
            }
            if n.block_comment {
                w.layout.append("*/");
            }
        });
    }
}
