use oxc_ast::ast;

use super::host::AccessLevel;

/// Name of a parameter binding. Plain identifiers and defaulted identifiers
/// yield the identifier; destructuring patterns yield their literal text
/// without the type annotation.
pub fn binding_pattern_name<'a>(pattern: &'a ast::BindingPattern<'a>, source: &'a str) -> &'a str {
    let span = match &pattern.kind {
        ast::BindingPatternKind::BindingIdentifier(id) => return id.name.as_str(),
        ast::BindingPatternKind::AssignmentPattern(assign) => {
            return binding_pattern_name(&assign.left, source)
        }
        ast::BindingPatternKind::ObjectPattern(object) => object.span,
        ast::BindingPatternKind::ArrayPattern(array) => array.span,
    };
    // The pattern span may extend over its own annotation.
    let end = pattern
        .type_annotation
        .as_ref()
        .map_or(span.end, |annotation| annotation.span.start.min(span.end));
    source[span.start as usize..end as usize]
        .trim_end_matches(|c: char| c == ':' || c == '?' || c.is_whitespace())
}

/// Type annotation of a parameter binding. For `x: T = init` the annotation
/// sits on the left side of the assignment pattern.
pub fn binding_pattern_type<'a>(pattern: &'a ast::BindingPattern<'a>) -> Option<&'a ast::TSType<'a>> {
    if let Some(annotation) = &pattern.type_annotation {
        return Some(&annotation.type_annotation);
    }
    match &pattern.kind {
        ast::BindingPatternKind::AssignmentPattern(assign) => binding_pattern_type(&assign.left),
        _ => None,
    }
}

/// Widened primitive type of a literal initializer, the way TypeScript
/// infers the type of a mutable field: `x = 5` is `number`.
pub fn widened_literal_type(expression: &ast::Expression<'_>) -> Option<&'static str> {
    match expression {
        ast::Expression::StringLiteral(_) | ast::Expression::TemplateLiteral(_) => Some("string"),
        ast::Expression::NumericLiteral(_) => Some("number"),
        ast::Expression::BooleanLiteral(_) => Some("boolean"),
        ast::Expression::BigIntLiteral(_) => Some("bigint"),
        ast::Expression::UnaryExpression(unary) if unary.operator.as_str() == "-" => {
            match &unary.argument {
                ast::Expression::NumericLiteral(_) => Some("number"),
                ast::Expression::BigIntLiteral(_) => Some("bigint"),
                _ => None,
            }
        }
        ast::Expression::ParenthesizedExpression(paren) => widened_literal_type(&paren.expression),
        _ => None,
    }
}

pub fn access_level_to_string(level: AccessLevel) -> &'static str {
    match level {
        AccessLevel::Private => "private",
        AccessLevel::Protected => "protected",
        AccessLevel::Public => "public",
    }
}
