//! Reflection Module
//!
//! Query interface over the oxc AST: class nodes, decorators, members,
//! constructor parameters and the literal source text behind each of them.

pub mod src;

pub use src::host::{
    AccessLevel, ClassDeclaration, ClassMember, ClassMemberKind, CtorParameter, Decorator,
    FunctionDefinition, ModifierFlags, Parameter, ReflectionHost,
};
pub use src::typescript::TypeScriptReflectionHost;
