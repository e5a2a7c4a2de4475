use bitflags::bitflags;
use oxc_ast::ast;
use oxc_span::{GetSpan, Span};
use serde::Serialize;

/// A decorator applied to a class, member or parameter.
#[derive(Debug, Clone)]
pub struct Decorator<'a> {
    /// Source text of the decorator from `@` to the end of its expression,
    /// trimmed. Arguments are not interpreted.
    pub text: &'a str,
}

/// The Oxc `Class` node.
// `id` is `None` for `export default class {}`.
pub type ClassDeclaration<'a> = ast::Class<'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMemberKind {
    Constructor,
    Getter,
    Setter,
    Property,
    Method,
}

/// Declared accessibility of a class member. Members without a modifier are
/// public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Public,
    Protected,
    Private,
}

impl AccessLevel {
    pub fn from_accessibility(accessibility: Option<ast::TSAccessibility>) -> Self {
        match accessibility {
            Some(ast::TSAccessibility::Private) => AccessLevel::Private,
            Some(ast::TSAccessibility::Protected) => AccessLevel::Protected,
            Some(ast::TSAccessibility::Public) | None => AccessLevel::Public,
        }
    }
}

bitflags! {
    /// Modifier keywords present on a class member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ModifierFlags: u8 {
        const STATIC = 1 << 0;
        const READONLY = 1 << 1;
    }
}

#[derive(Debug, Clone)]
pub struct ClassMember<'a> {
    pub kind: ClassMemberKind,
    pub access_level: AccessLevel,
    pub modifiers: ModifierFlags,

    /// Declared type of a property, `None` for methods and unannotated fields.
    pub type_node: Option<&'a ast::TSType<'a>>,

    /// Literal name text: quoted keys keep their quotes, computed keys their brackets.
    pub name: String,

    /// Property initializer.
    pub value: Option<&'a ast::Expression<'a>>,

    /// Function node of methods, accessors and constructors.
    pub function: Option<&'a ast::Function<'a>>,
}

impl<'a> ClassMember<'a> {
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(ModifierFlags::STATIC)
    }

    pub fn is_readonly(&self) -> bool {
        self.modifiers.contains(ModifierFlags::READONLY)
    }

    pub fn has_body(&self) -> bool {
        self.function.is_some_and(|f| f.body.is_some())
    }
}

#[derive(Debug, Clone)]
pub struct CtorParameter<'a> {
    pub name: &'a str,
    pub type_node: Option<&'a ast::TSType<'a>>,
    pub decorators: Vec<Decorator<'a>>,
}

#[derive(Debug, Clone)]
pub struct FunctionDefinition<'a> {
    /// Declared parameters, a rest parameter last. A `this` parameter is a
    /// type-level declaration and is not listed.
    pub parameters: Vec<Parameter<'a>>,
    pub return_type: Option<&'a ast::TSType<'a>>,
}

#[derive(Debug, Clone)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub type_node: Option<&'a ast::TSType<'a>>,
}

/// Abstracts reflection operations on the AST.
///
/// Every query returns nodes in source order.
pub trait ReflectionHost<'a> {
    /// Top-level class declarations, including `export` and `export default` forms.
    fn get_classes(&self, program: &'a ast::Program<'a>) -> Vec<&'a ClassDeclaration<'a>>;

    fn get_name_of_class(&self, clazz: &'a ClassDeclaration<'a>) -> Option<&'a str>;

    fn get_decorators_of_class(&self, clazz: &'a ClassDeclaration<'a>) -> Vec<Decorator<'a>>;

    /// Text of the `extends` clause including type arguments, e.g. `Repository<User>`.
    fn get_base_class_text(&self, clazz: &'a ClassDeclaration<'a>) -> Option<&'a str>;

    /// Text of each `implements` clause.
    fn get_implemented_types(&self, clazz: &'a ClassDeclaration<'a>) -> Vec<&'a str>;

    fn get_members_of_class(&self, clazz: &'a ClassDeclaration<'a>) -> Vec<ClassMember<'a>>;

    /// Parameters of the constructor implementation, or `None` when the
    /// class declares no constructor.
    fn get_constructor_parameters(
        &self,
        clazz: &'a ClassDeclaration<'a>,
    ) -> Option<Vec<CtorParameter<'a>>>;

    fn get_definition_of_function(&self, fn_node: &'a ast::Function<'a>) -> FunctionDefinition<'a>;

    /// Source text covered by `span`.
    fn get_text(&self, span: Span) -> &'a str;

    /// Literal text of a type annotation.
    fn get_type_text(&self, type_node: &'a ast::TSType<'a>) -> &'a str {
        self.get_text(type_node.span())
    }
}
