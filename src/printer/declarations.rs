use super::Walker;
use crate::ast::{
    AstNode,
    AnnotationDecl, AnnotationMethodDecl, ClassDecl, CompilationUnit, ConstructorDecl, EnumConstant, EnumDecl,
    ImportDecl, InterfaceDecl, MethodDecl, Node, PackageDecl, TypeBody,
};
use crate::layout::LayoutSink;

impl<'a, L: LayoutSink + ?Sized> Walker<'a, L> {
    pub(super) fn compilation_unit(&mut self, n: &CompilationUnit) {
        self.block(n, |w| {
            if n.package.is_some() {
                w.visit(n.package.as_deref());
                w.layout.vertical_space();
            }
            w.list(&n.imports, "", "", "\n");
            w.list(&n.type_decls, "\n", "", "");
        });
    }

    pub(super) fn package_declaration(&mut self, n: &PackageDecl) {
        self.block(n, |w| {
            w.list(&n.annotations, "", "", "");
            w.layout.keyword("package");
            w.layout.space();
            w.list(&n.parts, ".", "", "");
            w.layout.append(";");
        });
    }

    pub(super) fn import_declaration(&mut self, n: &ImportDecl) {
        self.block(n, |w| {
            w.layout.keyword("import");
            w.layout.space();
            if n.is_static {
                w.layout.keyword("static");
                w.layout.space();
            }
            w.list(&n.parts, ".", "", "");
            if n.is_wildcard {
                w.layout.append(".*");
            }
            w.layout.append(";");
        });
    }

    /// ` body` on the line of the declaration head
    fn declaration_body(&mut self, body: Option<&Node>) {
        if body.is_some() {
            self.layout.space();
            self.suppressed(body);
        }
    }

    pub(super) fn class_declaration(&mut self, n: &ClassDecl) {
        self.block(n, |w| {
            w.leading_modifiers(n.modifiers.as_deref());
            w.layout.keyword("class");
            w.layout.space();
            w.visit(n.name.as_deref());
            w.list(&n.type_variables, ", ", "<", ">");
            if n.extending.is_some() {
                w.layout.space();
                w.layout.keyword("extends");
                w.layout.space();
                w.visit(n.extending.as_deref());
            }
            if !n.implementing.is_empty() {
                w.layout.space();
                w.layout.keyword("implements");
                w.list(&n.implementing, ", ", " ", "");
            }
            w.declaration_body(n.body.as_deref());
        });
    }

    pub(super) fn interface_declaration(&mut self, n: &InterfaceDecl) {
        self.block(n, |w| {
            w.leading_modifiers(n.modifiers.as_deref());
            w.layout.keyword("interface");
            w.layout.space();
            w.visit(n.name.as_deref());
            w.list(&n.type_variables, ", ", "<", ">");
            if !n.extending.is_empty() {
                w.layout.space();
                w.layout.keyword("extends");
                w.list(&n.extending, ", ", " ", "");
            }
            w.declaration_body(n.body.as_deref());
        });
    }

    pub(super) fn enum_declaration(&mut self, n: &EnumDecl) {
        self.block(n, |w| {
            w.leading_modifiers(n.modifiers.as_deref());
            w.layout.keyword("enum");
            w.layout.space();
            w.visit(n.name.as_deref());
            if !n.implementing.is_empty() {
                w.layout.space();
                w.layout.keyword("implements");
                w.list(&n.implementing, ", ", " ", "");
            }

            // Constants belong to the declaration but print inside the body braces
            w.layout.space();
            w.layout.start_suppress_block();
            match n.body.as_deref() {
                Some(Node::TypeBody(body)) => w.type_body(body, &n.constants),
                None => w.type_body(&TypeBody::default(), &n.constants),
                // A foreign body is kept on its own line so the constants survive
                Some(other) => w.braced_members(other, &n.constants, true, |w| {
                    w.block(other, |w| w.visit(Some(other)))
                }),
            }
            w.layout.end_suppress_block();
        });
    }

    /// Members of a type; enum constants, if any, lead as one comma-separated line
    pub(super) fn type_body(&mut self, n: &TypeBody, constants: &[Node]) {
        self.braced_members(n, constants, !n.members.is_empty(), |w| w.list(&n.members, "\n", "", ""));
    }

    fn braced_members(
        &mut self,
        region: &dyn AstNode,
        constants: &[Node],
        has_members: bool,
        members: impl FnOnce(&mut Self),
    ) {
        self.block(region, |w| {
            w.layout.append("{");
            w.anon_block(|w| {
                if !constants.is_empty() {
                    w.block(region, |w| {
                        w.list(constants, ", ", "", "");
                        if has_members {
                            w.layout.append(";");
                        }
                    });
                }
                members(w);
            });
            w.layout.append("}");
        });
    }

    pub(super) fn enum_constant(&mut self, n: &EnumConstant) {
        self.inline(n, |w| {
            w.list(&n.annotations, "", "", "");
            w.visit(n.name.as_deref());
            w.list(&n.arguments, ", ", "(", ")");
            w.declaration_body(n.body.as_deref());
        });
    }

    pub(super) fn annotation_declaration(&mut self, n: &AnnotationDecl) {
        self.block(n, |w| {
            w.leading_modifiers(n.modifiers.as_deref());
            w.layout.append("@");
            w.layout.keyword("interface");
            w.layout.space();
            w.visit(n.name.as_deref());
            w.declaration_body(n.body.as_deref());
        });
    }

    pub(super) fn annotation_method_declaration(&mut self, n: &AnnotationMethodDecl) {
        self.block(n, |w| {
            w.leading_modifiers(n.modifiers.as_deref());
            w.visit(n.return_type.as_deref());
            w.layout.space();
            w.visit(n.name.as_deref());
            w.layout.append("()");
            if n.default_value.is_some() {
                w.layout.space();
                w.layout.keyword("default");
                w.layout.space();
                w.visit(n.default_value.as_deref());
            }
            w.layout.append(";");
        });
    }

    /// `(params) throws A, B` then the body, or `;` when there is none
    fn signature_tail(&mut self, parameters: &[Node], thrown: &[Node], body: Option<&Node>) {
        self.layout.append("(");
        self.list(parameters, ", ", "", "");
        self.layout.append(")");
        if !thrown.is_empty() {
            self.layout.space();
            self.layout.keyword("throws");
            self.list(thrown, ", ", " ", "");
        }
        if body.is_some() {
            self.declaration_body(body);
        } else {
            self.layout.append(";");
        }
    }

    pub(super) fn method_declaration(&mut self, n: &MethodDecl) {
        self.block(n, |w| {
            w.leading_modifiers(n.modifiers.as_deref());
            w.list(&n.type_variables, ", ", "<", ">");
            if !n.type_variables.is_empty() {
                w.layout.space();
            }
            w.visit(n.return_type.as_deref());
            w.layout.space();
            w.visit(n.name.as_deref());
            w.signature_tail(&n.parameters, &n.thrown_types, n.body.as_deref());
        });
    }

    pub(super) fn constructor_declaration(&mut self, n: &ConstructorDecl) {
        self.block(n, |w| {
            w.leading_modifiers(n.modifiers.as_deref());
            w.list(&n.type_variables, ", ", "<", ">");
            if !n.type_variables.is_empty() {
                w.layout.space();
            }
            w.visit(n.type_name.as_deref());
            w.signature_tail(&n.parameters, &n.thrown_types, n.body.as_deref());
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::print_source;
    use pretty_assertions::assert_eq;

    fn some(node: impl Into<Node>) -> Option<Box<Node>> {
        Some(Box::new(node.into()))
    }

    fn method(name: &str, body: Option<Node>) -> Node {
        MethodDecl {
            modifiers: some(Node::modifiers(&["public"])),
            return_type: some(Node::type_ref("void")),
            name: some(Node::ident(name)),
            body: body.map(Box::new),
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn abstract_method_ends_with_semicolon() {
        assert_eq!(print_source(&method("foo", None)).text, "public void foo();");
    }

    #[test]
    fn throws_clause_only_when_declared() {
        let Node::MethodDeclaration(mut m) = method("run", Some(Node::block(vec![]))) else { unreachable!() };
        assert_eq!(print_source(&m.clone().into()).text, "public void run() {}");
        m.thrown_types = vec![Node::type_ref("IOException"), Node::type_ref("java.sql.SQLException")];
        assert_eq!(
            print_source(&m.into()).text,
            "public void run() throws IOException, java.sql.SQLException {}"
        );
    }

    #[test]
    fn generic_method_with_parameters() {
        let m: Node = MethodDecl {
            type_variables: vec![TypeVar { name: some(Node::ident("T")), ..Default::default() }.into()],
            return_type: some(Node::type_ref("T")),
            name: some(Node::ident("id")),
            parameters: vec![Node::var_def("T", "t", None)],
            body: some(Node::block(vec![Node::ret(Some(Node::ident("t")))])),
            ..Default::default()
        }
        .into();
        assert_eq!(print_source(&m).text, "<T> T id(T t) {\n  return t;\n}");
    }

    #[test]
    fn enum_constants_then_members() {
        let constant = |name: &str| -> Node { EnumConstant { name: some(Node::ident(name)), ..Default::default() }.into() };
        let tree: Node = EnumDecl {
            name: some(Node::ident("E")),
            constants: vec![constant("A"), constant("B")],
            body: some(TypeBody { members: vec![method("m", None)], ..Default::default() }),
            ..Default::default()
        }
        .into();
        assert_eq!(print_source(&tree).text, "enum E {\n  A, B;\n  public void m();\n}");

        let bare: Node = EnumDecl {
            name: some(Node::ident("F")),
            constants: vec![constant("X")],
            ..Default::default()
        }
        .into();
        assert_eq!(print_source(&bare).text, "enum F {\n  X\n}");
    }

    #[test]
    fn class_with_members_and_annotations() {
        let annotation: Node = Annotation { annotation_type: some(Node::type_ref("Override")), ..Default::default() }.into();
        let mut annotated = method("toString", Some(Node::block(vec![Node::ret(Some(Node::string("c")))])));
        if let Node::MethodDeclaration(m) = &mut annotated {
            if let Some(Node::Modifiers(mods)) = m.modifiers.as_deref_mut() {
                mods.annotations.push(annotation);
            }
            m.return_type = some(Node::type_ref("String"));
        }
        let field = VarDeclStmt {
            definition: some(VarDef {
                modifiers: some(Node::modifiers(&["private", "final"])),
                type_ref: some(Node::type_ref("int")),
                variables: vec![VarDefEntry { name: some(Node::ident("x")), ..Default::default() }.into()],
                ..Default::default()
            }),
            ..Default::default()
        };
        let class: Node = ClassDecl {
            modifiers: some(Node::modifiers(&["public"])),
            name: some(Node::ident("C")),
            extending: some(Node::type_ref("Base")),
            implementing: vec![Node::type_ref("Runnable")],
            body: some(TypeBody { members: vec![field.into(), annotated], ..Default::default() }),
            ..Default::default()
        }
        .into();
        assert_eq!(
            print_source(&class).text,
            "public class C extends Base implements Runnable {\n  private final int x;\n\n  @Override public String toString() {\n    return \"c\";\n  }\n}"
        );
    }

    #[test]
    fn compilation_unit_layout() {
        let unit: Node = CompilationUnit {
            package: some(PackageDecl { parts: vec![Node::ident("a"), Node::ident("b")], ..Default::default() }),
            imports: vec![
                ImportDecl { parts: vec![Node::ident("java"), Node::ident("util")], is_wildcard: true, ..Default::default() }
                    .into(),
                ImportDecl {
                    is_static: true,
                    parts: vec![Node::ident("java"), Node::ident("lang"), Node::ident("Math"), Node::ident("max")],
                    ..Default::default()
                }
                .into(),
            ],
            type_decls: vec![
                InterfaceDecl { name: some(Node::ident("I")), body: some(TypeBody::default()), ..Default::default() }.into(),
                AnnotationDecl { name: some(Node::ident("A")), body: some(TypeBody::default()), ..Default::default() }.into(),
            ],
            ..Default::default()
        }
        .into();
        assert_eq!(
            print_source(&unit).text,
            "package a.b;\n\nimport java.util.*;\nimport static java.lang.Math.max;\n\ninterface I {}\n\n@interface A {}"
        );
    }

    #[test]
    fn initializers_and_annotation_methods() {
        let body = TypeBody {
            members: vec![
                StaticInitializer { body: some(Node::block(vec![])), ..Default::default() }.into(),
                AnnotationMethodDecl {
                    return_type: some(Node::type_ref("int")),
                    name: some(Node::ident("size")),
                    default_value: some(Node::int("3")),
                    ..Default::default()
                }
                .into(),
            ],
            ..Default::default()
        };
        assert_eq!(print_source(&body.into()).text, "{\n  static {}\n\n  int size() default 3;\n}");
    }
}
