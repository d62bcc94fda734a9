use super::literal;
use super::operators::{BinaryOp, UnaryOp};
use super::{AstNode, Node, NodeKind, Span};
use crate::error::{Error, Result};

/// Optional child slot holding any node
pub type Child = Option<Box<Node>>;

macro_rules! ast_node {
    ($ty:ident => $kind:ident) => {
        impl AstNode for $ty {
            fn kind(&self) -> NodeKind {
                NodeKind::$kind
            }

            fn span(&self) -> Span {
                self.span
            }
        }
    };
    ($ty:ident => $kind:ident, checked) => {
        impl AstNode for $ty {
            fn kind(&self) -> NodeKind {
                NodeKind::$kind
            }

            fn span(&self) -> Span {
                self.span
            }

            fn is_syntactically_valid(&self) -> bool {
                self.problem.is_none()
            }
        }
    };
}

// Basics

/// Why an identifier name cannot be printed as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierFault {
    Null,
    Empty,
    IllegalCharacters,
}

/// Java `Character.isJavaIdentifierStart`, approximated with Unicode properties
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic()
        || c == '_'
        || c == '$'
        || matches!(c, '\u{a2}'..='\u{a5}' | '\u{20a0}'..='\u{20cf}')
        || matches!(c, '\u{203f}' | '\u{2040}' | '\u{2054}' | '\u{fe33}' | '\u{fe34}' | '\u{fe4d}'..='\u{fe4f}' | '\u{ff3f}')
}

/// Java `Character.isJavaIdentifierPart`, approximated with Unicode properties
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_alphanumeric() || matches!(c, '\u{300}'..='\u{36f}')
}

/// Check a raw identifier name; `None` means it is fine to print verbatim
pub fn identifier_fault(name: Option<&str>) -> Option<IdentifierFault> {
    let name = match name {
        None => return Some(IdentifierFault::Null),
        Some(name) => name,
    };
    let mut chars = name.chars();
    match chars.next() {
        None => Some(IdentifierFault::Empty),
        Some(first) if !is_identifier_start(first) => Some(IdentifierFault::IllegalCharacters),
        Some(_) if !chars.all(is_identifier_part) => Some(IdentifierFault::IllegalCharacters),
        Some(_) => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Identifier {
    pub name: Option<String>,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(Identifier => Identifier, checked);

impl Identifier {
    /// Build an identifier, recording a problem when the name is not legal
    pub fn of(name: impl Into<String>) -> Self {
        let name = name.into();
        let problem = identifier_fault(Some(&name)).map(|fault| match fault {
            IdentifierFault::Null | IdentifierFault::Empty => "empty identifier".to_string(),
            IdentifierFault::IllegalCharacters => format!("`{}` is not a legal identifier", name),
        });
        Self { name: Some(name), problem, span: Span::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WildcardKind {
    #[default]
    None,
    Unbound,
    Extends,
    Super,
}

/// A possibly qualified, possibly generic type reference such as `java.util.List<String>[]`
#[derive(Debug, Clone, Default)]
pub struct TypeRef {
    pub wildcard: WildcardKind,
    pub parts: Vec<Node>,
    pub array_dimensions: usize,
    pub span: Span,
}
ast_node!(TypeRef => TypeReference);

#[derive(Debug, Clone, Default)]
pub struct TypeRefPart {
    pub identifier: Child,
    pub type_arguments: Child,
    pub span: Span,
}
ast_node!(TypeRefPart => TypeReferencePart);

#[derive(Debug, Clone, Default)]
pub struct TypeArgs {
    pub generics: Vec<Node>,
    pub span: Span,
}
ast_node!(TypeArgs => TypeArguments);

#[derive(Debug, Clone, Default)]
pub struct TypeVar {
    pub name: Child,
    pub extending: Vec<Node>,
    pub span: Span,
}
ast_node!(TypeVar => TypeVariable);

#[derive(Debug, Clone, Default)]
pub struct KeywordModifier {
    pub name: Option<String>,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(KeywordModifier => KeywordModifier, checked);

/// Keywords accepted by [`KeywordModifier::of`]
pub const MODIFIER_KEYWORDS: &[&str] = &[
    "public", "protected", "private", "abstract", "static", "final", "native",
    "synchronized", "transient", "volatile", "strictfp", "default",
];

impl KeywordModifier {
    pub fn of(name: impl Into<String>) -> Self {
        let name = name.into();
        let problem = if MODIFIER_KEYWORDS.contains(&name.as_str()) {
            None
        } else {
            Some(format!("`{}` is not a modifier keyword", name))
        };
        Self { name: Some(name), problem, span: Span::default() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Modifiers {
    pub annotations: Vec<Node>,
    pub keywords: Vec<Node>,
    pub span: Span,
}
ast_node!(Modifiers => Modifiers);

#[derive(Debug, Clone, Default)]
pub struct Annotation {
    pub annotation_type: Child,
    pub elements: Vec<Node>,
    pub span: Span,
}
ast_node!(Annotation => Annotation);

#[derive(Debug, Clone, Default)]
pub struct AnnotationElement {
    pub name: Child,
    pub value: Child,
    pub span: Span,
}
ast_node!(AnnotationElement => AnnotationElement);

/// Type plus declarators, shared by fields, locals, parameters and catch clauses
#[derive(Debug, Clone, Default)]
pub struct VarDef {
    pub modifiers: Child,
    pub type_ref: Child,
    pub varargs: bool,
    pub variables: Vec<Node>,
    pub span: Span,
}
ast_node!(VarDef => VariableDefinition);

#[derive(Debug, Clone, Default)]
pub struct VarDefEntry {
    pub name: Child,
    pub array_dimensions: usize,
    pub initializer: Child,
    pub span: Span,
}
ast_node!(VarDefEntry => VariableDefinitionEntry);

#[derive(Debug, Clone, Default)]
pub struct Comment {
    pub block_comment: bool,
    pub content: Option<String>,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(Comment => Comment, checked);

impl Comment {
    pub fn line(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), ..Default::default() }
    }

    pub fn block(content: impl Into<String>) -> Self {
        let content = content.into();
        let problem = content.contains("*/").then(|| "block comment content contains `*/`".to_string());
        Self { block_comment: true, content: Some(content), problem, span: Span::default() }
    }
}

// Literals

#[derive(Debug, Clone, Default)]
pub struct IntegralLiteral {
    pub raw: Option<String>,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(IntegralLiteral => IntegralLiteral, checked);

impl IntegralLiteral {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let problem = literal::decode_integral(&raw).err().map(|e| e.to_string());
        Self { raw: Some(raw), problem, span: Span::default() }
    }

    pub fn of_int(value: i32) -> Self {
        Self::from_raw(literal::encode_int(value))
    }

    pub fn of_long(value: i64) -> Self {
        Self::from_raw(literal::encode_long(value))
    }

    pub fn is_marked_as_long(&self) -> bool {
        self.raw.as_deref().map_or(false, |raw| raw.ends_with(['l', 'L']))
    }

    pub fn int_value(&self) -> Result<i32> {
        let raw = self.raw.as_deref().ok_or_else(|| Error::missing("integral literal text"))?;
        let (value, long) = literal::decode_integral(raw)?;
        if long {
            return Err(Error::literal_error("integral", raw, "long literal read as int"));
        }
        Ok(value as i32)
    }

    pub fn long_value(&self) -> Result<i64> {
        let raw = self.raw.as_deref().ok_or_else(|| Error::missing("integral literal text"))?;
        literal::decode_integral(raw).map(|(value, _)| value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FloatingPointLiteral {
    pub raw: Option<String>,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(FloatingPointLiteral => FloatingPointLiteral, checked);

impl FloatingPointLiteral {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let problem = literal::decode_floating(&raw).err().map(|e| e.to_string());
        Self { raw: Some(raw), problem, span: Span::default() }
    }

    pub fn of_float(value: f32) -> Result<Self> {
        Ok(Self::from_raw(literal::encode_float(value)?))
    }

    pub fn of_double(value: f64) -> Result<Self> {
        Ok(Self::from_raw(literal::encode_double(value)?))
    }

    pub fn is_marked_as_float(&self) -> bool {
        let Some(raw) = self.raw.as_deref() else { return false };
        // `0x1p3f` is a float, while the trailing `f` of `0xf` is a hex digit
        raw.ends_with(['f', 'F']) && (!literal::is_hex_prefixed(raw) || raw.contains(['p', 'P']))
    }

    pub fn float_value(&self) -> Result<f32> {
        let raw = self.raw.as_deref().ok_or_else(|| Error::missing("floating point literal text"))?;
        let (value, is_float) = literal::decode_floating(raw)?;
        if !is_float {
            return Err(Error::literal_error("floating point", raw, "double literal read as float"));
        }
        Ok(value as f32)
    }

    pub fn double_value(&self) -> Result<f64> {
        let raw = self.raw.as_deref().ok_or_else(|| Error::missing("floating point literal text"))?;
        literal::decode_floating(raw).map(|(value, _)| value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BooleanLiteral {
    pub raw: Option<String>,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(BooleanLiteral => BooleanLiteral, checked);

impl BooleanLiteral {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let problem = literal::decode_boolean(&raw).err().map(|e| e.to_string());
        Self { raw: Some(raw), problem, span: Span::default() }
    }

    pub fn of(value: bool) -> Self {
        Self::from_raw(value.to_string())
    }

    pub fn value(&self) -> Result<bool> {
        let raw = self.raw.as_deref().ok_or_else(|| Error::missing("boolean literal text"))?;
        literal::decode_boolean(raw)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CharLiteral {
    pub raw: Option<String>,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(CharLiteral => CharLiteral, checked);

impl CharLiteral {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let problem = literal::decode_char(&raw).err().map(|e| e.to_string());
        Self { raw: Some(raw), problem, span: Span::default() }
    }

    pub fn of(value: char) -> Result<Self> {
        Ok(Self::from_raw(literal::encode_char(value)?))
    }

    pub fn value(&self) -> Result<char> {
        let raw = self.raw.as_deref().ok_or_else(|| Error::missing("char literal text"))?;
        literal::decode_char(raw)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StringLiteral {
    pub raw: Option<String>,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(StringLiteral => StringLiteral, checked);

impl StringLiteral {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let problem = literal::decode_string(&raw).err().map(|e| e.to_string());
        Self { raw: Some(raw), problem, span: Span::default() }
    }

    pub fn of(value: &str) -> Self {
        Self::from_raw(literal::encode_string(value))
    }

    pub fn value(&self) -> Result<String> {
        let raw = self.raw.as_deref().ok_or_else(|| Error::missing("string literal text"))?;
        literal::decode_string(raw)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NullLiteral {
    pub span: Span,
}
ast_node!(NullLiteral => NullLiteral);

// Expressions

#[derive(Debug, Clone, Default)]
pub struct BinaryExpr {
    pub left: Child,
    pub raw_operator: Option<String>,
    pub right: Child,
    /// Parentheses written around this expression in the source
    pub explicit_parens: u32,
    /// Computed by [`super::precedence::assign_parentheses`]
    pub needs_parens: bool,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(BinaryExpr => BinaryExpression, checked);

impl BinaryExpr {
    pub fn operator(&self) -> Result<BinaryOp> {
        let raw = self.raw_operator.as_deref().ok_or_else(|| Error::missing("binary operator"))?;
        BinaryOp::from_symbol(raw).ok_or_else(|| Error::operator_error("binary", raw))
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnaryExpr {
    pub raw_operator: Option<String>,
    pub postfix: bool,
    pub operand: Child,
    pub explicit_parens: u32,
    pub needs_parens: bool,
    pub problem: Option<String>,
    pub span: Span,
}
ast_node!(UnaryExpr => UnaryExpression, checked);

impl UnaryExpr {
    pub fn operator(&self) -> Result<UnaryOp> {
        let raw = self.raw_operator.as_deref().ok_or_else(|| Error::missing("unary operator"))?;
        UnaryOp::from_symbol(raw, self.postfix).ok_or_else(|| Error::operator_error("unary", raw))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CastExpr {
    pub type_ref: Child,
    pub operand: Child,
    pub explicit_parens: u32,
    pub needs_parens: bool,
    pub span: Span,
}
ast_node!(CastExpr => Cast);

#[derive(Debug, Clone, Default)]
pub struct InlineIfExpr {
    pub condition: Child,
    pub if_true: Child,
    pub if_false: Child,
    pub explicit_parens: u32,
    pub needs_parens: bool,
    pub span: Span,
}
ast_node!(InlineIfExpr => InlineIfExpression);

#[derive(Debug, Clone, Default)]
pub struct InstanceOfExpr {
    pub operand: Child,
    pub type_ref: Child,
    pub explicit_parens: u32,
    pub needs_parens: bool,
    pub span: Span,
}
ast_node!(InstanceOfExpr => InstanceOf);

/// `outer.new <T>Type(args) { body }`
#[derive(Debug, Clone, Default)]
pub struct NewExpr {
    pub qualifier: Child,
    pub type_arguments: Child,
    pub type_ref: Child,
    pub arguments: Vec<Node>,
    pub anonymous_body: Child,
    pub span: Span,
}
ast_node!(NewExpr => ConstructorInvocation);

#[derive(Debug, Clone, Default)]
pub struct MethodCallExpr {
    pub operand: Child,
    pub type_arguments: Child,
    pub name: Child,
    pub arguments: Vec<Node>,
    pub span: Span,
}
ast_node!(MethodCallExpr => MethodInvocation);

#[derive(Debug, Clone, Default)]
pub struct SelectExpr {
    pub operand: Child,
    pub identifier: Child,
    pub span: Span,
}
ast_node!(SelectExpr => Select);

#[derive(Debug, Clone, Default)]
pub struct ArrayAccessExpr {
    pub operand: Child,
    pub index: Child,
    pub span: Span,
}
ast_node!(ArrayAccessExpr => ArrayAccess);

#[derive(Debug, Clone, Default)]
pub struct ArrayCreationExpr {
    pub component_type: Child,
    pub dimensions: Vec<Node>,
    pub initializer: Child,
    pub span: Span,
}
ast_node!(ArrayCreationExpr => ArrayCreation);

/// One `[expr]` or `[]` of an array creation
#[derive(Debug, Clone, Default)]
pub struct ArrayDimension {
    pub dimension: Child,
    pub span: Span,
}
ast_node!(ArrayDimension => ArrayDimension);

#[derive(Debug, Clone, Default)]
pub struct ArrayInitializer {
    pub expressions: Vec<Node>,
    pub span: Span,
}
ast_node!(ArrayInitializer => ArrayInitializer);

#[derive(Debug, Clone, Default)]
pub struct ClassLiteral {
    pub type_ref: Child,
    pub span: Span,
}
ast_node!(ClassLiteral => ClassLiteral);

#[derive(Debug, Clone, Default)]
pub struct SuperExpr {
    pub qualifier: Child,
    pub span: Span,
}
ast_node!(SuperExpr => Super);

#[derive(Debug, Clone, Default)]
pub struct ThisExpr {
    pub qualifier: Child,
    pub span: Span,
}
ast_node!(ThisExpr => This);

// Statements

#[derive(Debug, Clone, Default)]
pub struct ExprStmt {
    pub expression: Child,
    pub span: Span,
}
ast_node!(ExprStmt => ExpressionStatement);

#[derive(Debug, Clone, Default)]
pub struct LabeledStmt {
    pub label: Child,
    pub statement: Child,
    pub span: Span,
}
ast_node!(LabeledStmt => LabelledStatement);

#[derive(Debug, Clone, Default)]
pub struct IfStmt {
    pub condition: Child,
    pub statement: Child,
    pub else_statement: Child,
    pub span: Span,
}
ast_node!(IfStmt => If);

#[derive(Debug, Clone, Default)]
pub struct ForStmt {
    pub inits: Vec<Node>,
    pub condition: Child,
    pub updates: Vec<Node>,
    pub statement: Child,
    pub span: Span,
}
ast_node!(ForStmt => For);

#[derive(Debug, Clone, Default)]
pub struct ForEachStmt {
    pub variable: Child,
    pub iterable: Child,
    pub statement: Child,
    pub span: Span,
}
ast_node!(ForEachStmt => ForEach);

#[derive(Debug, Clone, Default)]
pub struct WhileStmt {
    pub condition: Child,
    pub statement: Child,
    pub span: Span,
}
ast_node!(WhileStmt => While);

#[derive(Debug, Clone, Default)]
pub struct DoWhileStmt {
    pub statement: Child,
    pub condition: Child,
    pub span: Span,
}
ast_node!(DoWhileStmt => DoWhile);

#[derive(Debug, Clone, Default)]
pub struct TryStmt {
    pub body: Child,
    pub catches: Vec<Node>,
    pub finally: Child,
    pub span: Span,
}
ast_node!(TryStmt => Try);

#[derive(Debug, Clone, Default)]
pub struct CatchClause {
    pub exception_declaration: Child,
    pub body: Child,
    pub span: Span,
}
ast_node!(CatchClause => Catch);

/// `switch (cond) body`; the body block holds `case`/`default` labels as statements
#[derive(Debug, Clone, Default)]
pub struct SwitchStmt {
    pub condition: Child,
    pub body: Child,
    pub span: Span,
}
ast_node!(SwitchStmt => Switch);

#[derive(Debug, Clone, Default)]
pub struct CaseLabel {
    pub condition: Child,
    pub span: Span,
}
ast_node!(CaseLabel => Case);

#[derive(Debug, Clone, Default)]
pub struct DefaultLabel {
    pub span: Span,
}
ast_node!(DefaultLabel => Default);

#[derive(Debug, Clone, Default)]
pub struct BreakStmt {
    pub label: Child,
    pub span: Span,
}
ast_node!(BreakStmt => Break);

#[derive(Debug, Clone, Default)]
pub struct ContinueStmt {
    pub label: Child,
    pub span: Span,
}
ast_node!(ContinueStmt => Continue);

#[derive(Debug, Clone, Default)]
pub struct ReturnStmt {
    pub value: Child,
    pub span: Span,
}
ast_node!(ReturnStmt => Return);

#[derive(Debug, Clone, Default)]
pub struct ThrowStmt {
    pub throwable: Child,
    pub span: Span,
}
ast_node!(ThrowStmt => Throw);

#[derive(Debug, Clone, Default)]
pub struct AssertStmt {
    pub assertion: Child,
    pub message: Child,
    pub span: Span,
}
ast_node!(AssertStmt => Assert);

#[derive(Debug, Clone, Default)]
pub struct SynchronizedStmt {
    pub lock: Child,
    pub body: Child,
    pub span: Span,
}
ast_node!(SynchronizedStmt => Synchronized);

#[derive(Debug, Clone, Default)]
pub struct EmptyStmt {
    pub span: Span,
}
ast_node!(EmptyStmt => EmptyStatement);

#[derive(Debug, Clone, Default)]
pub struct Block {
    pub contents: Vec<Node>,
    pub span: Span,
}
ast_node!(Block => Block);

#[derive(Debug, Clone, Default)]
pub struct VarDeclStmt {
    pub definition: Child,
    pub span: Span,
}
ast_node!(VarDeclStmt => VariableDeclaration);

#[derive(Debug, Clone, Default)]
pub struct SuperCtorCall {
    pub qualifier: Child,
    pub type_arguments: Child,
    pub arguments: Vec<Node>,
    pub span: Span,
}
ast_node!(SuperCtorCall => SuperConstructorInvocation);

#[derive(Debug, Clone, Default)]
pub struct ThisCtorCall {
    pub type_arguments: Child,
    pub arguments: Vec<Node>,
    pub span: Span,
}
ast_node!(ThisCtorCall => AlternateConstructorInvocation);

// Declarations and structure

#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    pub package: Child,
    pub imports: Vec<Node>,
    pub type_decls: Vec<Node>,
    pub span: Span,
}
ast_node!(CompilationUnit => CompilationUnit);

#[derive(Debug, Clone, Default)]
pub struct PackageDecl {
    pub annotations: Vec<Node>,
    pub parts: Vec<Node>,
    pub span: Span,
}
ast_node!(PackageDecl => PackageDeclaration);

#[derive(Debug, Clone, Default)]
pub struct ImportDecl {
    pub is_static: bool,
    pub is_wildcard: bool,
    pub parts: Vec<Node>,
    pub span: Span,
}
ast_node!(ImportDecl => ImportDeclaration);

#[derive(Debug, Clone, Default)]
pub struct ClassDecl {
    pub modifiers: Child,
    pub name: Child,
    pub type_variables: Vec<Node>,
    pub extending: Child,
    pub implementing: Vec<Node>,
    pub body: Child,
    pub span: Span,
}
ast_node!(ClassDecl => ClassDeclaration);

#[derive(Debug, Clone, Default)]
pub struct InterfaceDecl {
    pub modifiers: Child,
    pub name: Child,
    pub type_variables: Vec<Node>,
    pub extending: Vec<Node>,
    pub body: Child,
    pub span: Span,
}
ast_node!(InterfaceDecl => InterfaceDeclaration);

/// Enum declaration; constants live here, other members in `body`
#[derive(Debug, Clone, Default)]
pub struct EnumDecl {
    pub modifiers: Child,
    pub name: Child,
    pub implementing: Vec<Node>,
    pub constants: Vec<Node>,
    pub body: Child,
    pub span: Span,
}
ast_node!(EnumDecl => EnumDeclaration);

#[derive(Debug, Clone, Default)]
pub struct EnumConstant {
    pub annotations: Vec<Node>,
    pub name: Child,
    pub arguments: Vec<Node>,
    pub body: Child,
    pub span: Span,
}
ast_node!(EnumConstant => EnumConstant);

#[derive(Debug, Clone, Default)]
pub struct AnnotationDecl {
    pub modifiers: Child,
    pub name: Child,
    pub body: Child,
    pub span: Span,
}
ast_node!(AnnotationDecl => AnnotationDeclaration);

#[derive(Debug, Clone, Default)]
pub struct AnnotationMethodDecl {
    pub modifiers: Child,
    pub return_type: Child,
    pub name: Child,
    pub default_value: Child,
    pub span: Span,
}
ast_node!(AnnotationMethodDecl => AnnotationMethodDeclaration);

#[derive(Debug, Clone, Default)]
pub struct MethodDecl {
    pub modifiers: Child,
    pub type_variables: Vec<Node>,
    pub return_type: Child,
    pub name: Child,
    pub parameters: Vec<Node>,
    pub thrown_types: Vec<Node>,
    pub body: Child,
    pub span: Span,
}
ast_node!(MethodDecl => MethodDeclaration);

#[derive(Debug, Clone, Default)]
pub struct ConstructorDecl {
    pub modifiers: Child,
    pub type_variables: Vec<Node>,
    pub type_name: Child,
    pub parameters: Vec<Node>,
    pub thrown_types: Vec<Node>,
    pub body: Child,
    pub span: Span,
}
ast_node!(ConstructorDecl => ConstructorDeclaration);

#[derive(Debug, Clone, Default)]
pub struct InstanceInitializer {
    pub body: Child,
    pub span: Span,
}
ast_node!(InstanceInitializer => InstanceInitializer);

#[derive(Debug, Clone, Default)]
pub struct StaticInitializer {
    pub body: Child,
    pub span: Span,
}
ast_node!(StaticInitializer => StaticInitializer);

#[derive(Debug, Clone, Default)]
pub struct TypeBody {
    pub members: Vec<Node>,
    pub span: Span,
}
ast_node!(TypeBody => TypeBody);

// Placeholders

/// Leftover of error recovery in a parser, e.g. a skipped token run
#[derive(Debug, Clone, Default)]
pub struct ParseArtifact {
    pub kind_name: String,
    pub span: Span,
}
ast_node!(ParseArtifact => ParseArtifact);

/// A construct the model can carry but not describe, e.g. a lambda from a newer language level
#[derive(Debug, Clone, Default)]
pub struct UnsupportedNode {
    pub kind_name: String,
    pub span: Span,
}
ast_node!(UnsupportedNode => Unsupported);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_faults() {
        assert_eq!(identifier_fault(None), Some(IdentifierFault::Null));
        assert_eq!(identifier_fault(Some("")), Some(IdentifierFault::Empty));
        assert_eq!(identifier_fault(Some("9lives")), Some(IdentifierFault::IllegalCharacters));
        assert_eq!(identifier_fault(Some("a-b")), Some(IdentifierFault::IllegalCharacters));
        assert_eq!(identifier_fault(Some("$value_1")), None);
        assert_eq!(identifier_fault(Some("\u{e9}t\u{e9}")), None);
    }

    #[test]
    fn checked_constructors_record_problems() {
        assert!(Identifier::of("ok").is_syntactically_valid());
        assert!(!Identifier::of("").is_syntactically_valid());
        assert!(!KeywordModifier::of("publik").is_syntactically_valid());
        assert!(!IntegralLiteral::from_raw("12a").is_syntactically_valid());
        assert!(!Comment::block("a */ b").is_syntactically_valid());
    }

    #[test]
    fn integral_accessors() {
        let lit = IntegralLiteral::from_raw("0xFFFFFFFF");
        assert_eq!(lit.int_value(), Ok(-1));
        assert_eq!(lit.long_value(), Ok(-1));
        let long = IntegralLiteral::from_raw("10L");
        assert!(long.is_marked_as_long());
        assert!(long.int_value().is_err());
        assert_eq!(long.long_value(), Ok(10));
        assert!(IntegralLiteral::default().int_value().is_err());
    }

    #[test]
    fn float_marker_ignores_hex_digits() {
        assert!(FloatingPointLiteral::from_raw("1.5f").is_marked_as_float());
        assert!(FloatingPointLiteral::from_raw("0x1p3f").is_marked_as_float());
        assert!(!FloatingPointLiteral::from_raw("2.5").is_marked_as_float());
    }

    #[test]
    fn operator_lookup_can_fail() {
        let ok = BinaryExpr { raw_operator: Some("<<=".into()), ..Default::default() };
        assert_eq!(ok.operator(), Ok(BinaryOp::LShiftAssign));
        let bad = BinaryExpr { raw_operator: Some("<=>".into()), ..Default::default() };
        assert!(bad.operator().is_err());
        let postfix_plus = UnaryExpr { raw_operator: Some("+".into()), postfix: true, ..Default::default() };
        assert!(postfix_plus.operator().is_err());
    }
}
