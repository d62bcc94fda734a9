//! Syntax tree model consumed by the printer.
//!
//! Nodes are plain data: every optional child is an `Option` field (the raw
//! accessor), while values derived from raw text (operators, literal values)
//! are exposed through methods returning [`crate::Result`]. Nodes that can be
//! malformed carry a `problem` recorded by their checked constructors; that
//! record is what [`AstNode::is_syntactically_valid`] reports.

mod nodes;
mod build;
pub mod literal;
pub mod operators;
pub mod precedence;
pub mod walk;

pub use nodes::*;
pub use operators::{BinaryOp, UnaryOp};

use std::fmt;

/// Source location information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

/// Span of source code (start and end locations).
///
/// Trees built programmatically use `Span::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}:{}", self.start.line, self.start.column, self.end.line, self.end.column)
    }
}

/// AST node trait that all AST nodes implement
pub trait AstNode: fmt::Debug {
    /// Concrete kind of this node
    fn kind(&self) -> NodeKind;

    /// Get the source span of this node
    fn span(&self) -> Span;

    /// Whether the node itself (not its children) is free of recorded problems
    fn is_syntactically_valid(&self) -> bool {
        true
    }
}

macro_rules! node_kinds {
    ($($variant:ident($ty:ident)),+ $(,)?) => {
        /// Closed set of node kinds
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($variant,)+
        }

        impl NodeKind {
            /// Name of the concrete kind, as used in failure markers
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)+
                }
            }
        }

        /// A syntax tree node: one variant per concrete kind
        #[derive(Debug, Clone)]
        pub enum Node {
            $($variant($ty),)+
        }

        impl AstNode for Node {
            fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$variant(_) => NodeKind::$variant,)+
                }
            }

            fn span(&self) -> Span {
                match self {
                    $(Node::$variant(n) => n.span(),)+
                }
            }

            fn is_syntactically_valid(&self) -> bool {
                match self {
                    $(Node::$variant(n) => n.is_syntactically_valid(),)+
                }
            }
        }

        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )+
    };
}

node_kinds! {
    // Basics
    Identifier(Identifier),
    TypeReference(TypeRef),
    TypeReferencePart(TypeRefPart),
    TypeArguments(TypeArgs),
    TypeVariable(TypeVar),
    KeywordModifier(KeywordModifier),
    Modifiers(Modifiers),
    Annotation(Annotation),
    AnnotationElement(AnnotationElement),
    VariableDefinition(VarDef),
    VariableDefinitionEntry(VarDefEntry),
    Comment(Comment),

    // Literals
    IntegralLiteral(IntegralLiteral),
    FloatingPointLiteral(FloatingPointLiteral),
    BooleanLiteral(BooleanLiteral),
    CharLiteral(CharLiteral),
    StringLiteral(StringLiteral),
    NullLiteral(NullLiteral),

    // Expressions
    BinaryExpression(BinaryExpr),
    UnaryExpression(UnaryExpr),
    Cast(CastExpr),
    InlineIfExpression(InlineIfExpr),
    InstanceOf(InstanceOfExpr),
    ConstructorInvocation(NewExpr),
    MethodInvocation(MethodCallExpr),
    Select(SelectExpr),
    ArrayAccess(ArrayAccessExpr),
    ArrayCreation(ArrayCreationExpr),
    ArrayDimension(ArrayDimension),
    ArrayInitializer(ArrayInitializer),
    ClassLiteral(ClassLiteral),
    Super(SuperExpr),
    This(ThisExpr),

    // Statements
    ExpressionStatement(ExprStmt),
    LabelledStatement(LabeledStmt),
    If(IfStmt),
    For(ForStmt),
    ForEach(ForEachStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    Try(TryStmt),
    Catch(CatchClause),
    Switch(SwitchStmt),
    Case(CaseLabel),
    Default(DefaultLabel),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Return(ReturnStmt),
    Throw(ThrowStmt),
    Assert(AssertStmt),
    Synchronized(SynchronizedStmt),
    EmptyStatement(EmptyStmt),
    Block(Block),
    VariableDeclaration(VarDeclStmt),
    SuperConstructorInvocation(SuperCtorCall),
    AlternateConstructorInvocation(ThisCtorCall),

    // Declarations and structure
    CompilationUnit(CompilationUnit),
    PackageDeclaration(PackageDecl),
    ImportDeclaration(ImportDecl),
    ClassDeclaration(ClassDecl),
    InterfaceDeclaration(InterfaceDecl),
    EnumDeclaration(EnumDecl),
    EnumConstant(EnumConstant),
    AnnotationDeclaration(AnnotationDecl),
    AnnotationMethodDeclaration(AnnotationMethodDecl),
    MethodDeclaration(MethodDecl),
    ConstructorDeclaration(ConstructorDecl),
    InstanceInitializer(InstanceInitializer),
    StaticInitializer(StaticInitializer),
    TypeBody(TypeBody),

    // Placeholders
    ParseArtifact(ParseArtifact),
    Unsupported(UnsupportedNode),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_follow_variants() {
        assert_eq!(NodeKind::BinaryExpression.name(), "BinaryExpression");
        assert_eq!(Node::ident("x").kind(), NodeKind::Identifier);
        assert_eq!(NodeKind::TypeBody.to_string(), "TypeBody");
    }

    #[test]
    fn validity_delegates_to_the_wrapped_node() {
        assert!(Node::ident("x").is_syntactically_valid());
        assert!(!Node::ident("1x").is_syntactically_valid());
        assert!(Node::from(EmptyStmt::default()).is_syntactically_valid());
    }
}
