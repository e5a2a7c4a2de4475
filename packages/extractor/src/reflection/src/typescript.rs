use super::host::*;
use super::util::{binding_pattern_name, binding_pattern_type};
use oxc_ast::ast;
use oxc_span::{GetSpan, Span};

/// Reflection host over an oxc TypeScript AST.
///
/// Holds the file text so that any node can be read back as the literal
/// source it was parsed from.
pub struct TypeScriptReflectionHost<'a> {
    source: &'a str,
}

impl<'a> TypeScriptReflectionHost<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    fn convert_decorators(&self, oxc_decorators: &'a [ast::Decorator<'a>]) -> Vec<Decorator<'a>> {
        oxc_decorators
            .iter()
            .map(|decorator| Decorator {
                text: self.get_text(decorator.span).trim(),
            })
            .collect()
    }

    fn member_name(&self, key: &'a ast::PropertyKey<'a>, computed: bool) -> String {
        let text = self.get_text(key.span());
        if computed {
            format!("[{}]", text)
        } else {
            text.to_string()
        }
    }

    /// `this` parameters live on `Function::this_param` and never appear here.
    fn convert_parameters(&self, params: &'a ast::FormalParameters<'a>) -> Vec<CtorParameter<'a>> {
        let mut result = Vec::with_capacity(params.items.len() + 1);
        for param in &params.items {
            result.push(CtorParameter {
                name: binding_pattern_name(&param.pattern, self.source),
                type_node: binding_pattern_type(&param.pattern),
                decorators: self.convert_decorators(&param.decorators),
            });
        }
        if let Some(rest) = &params.rest {
            result.push(CtorParameter {
                name: binding_pattern_name(&rest.argument, self.source),
                type_node: binding_pattern_type(&rest.argument),
                decorators: Vec::new(),
            });
        }
        result
    }
}

impl<'a> ReflectionHost<'a> for TypeScriptReflectionHost<'a> {
    fn get_classes(&self, program: &'a ast::Program<'a>) -> Vec<&'a ClassDeclaration<'a>> {
        program
            .body
            .iter()
            .filter_map(|stmt| match stmt {
                ast::Statement::ClassDeclaration(class) => Some(&**class),
                ast::Statement::ExportNamedDeclaration(decl) => match &decl.declaration {
                    Some(ast::Declaration::ClassDeclaration(class)) => Some(&**class),
                    _ => None,
                },
                ast::Statement::ExportDefaultDeclaration(decl) => match &decl.declaration {
                    ast::ExportDefaultDeclarationKind::ClassDeclaration(class) => Some(&**class),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }

    fn get_name_of_class(&self, clazz: &'a ClassDeclaration<'a>) -> Option<&'a str> {
        clazz.id.as_ref().map(|id| self.get_text(id.span))
    }

    fn get_decorators_of_class(&self, clazz: &'a ClassDeclaration<'a>) -> Vec<Decorator<'a>> {
        self.convert_decorators(&clazz.decorators)
    }

    fn get_base_class_text(&self, clazz: &'a ClassDeclaration<'a>) -> Option<&'a str> {
        let expression = clazz.super_class.as_ref()?;
        let span = expression.span();
        let end = clazz
            .super_type_arguments
            .as_ref()
            .map_or(span.end, |args| args.span.end);
        Some(self.get_text(Span::new(span.start, end)))
    }

    fn get_implemented_types(&self, clazz: &'a ClassDeclaration<'a>) -> Vec<&'a str> {
        clazz
            .implements
            .iter()
            .map(|clause| self.get_text(clause.span))
            .collect()
    }

    fn get_members_of_class(&self, clazz: &'a ClassDeclaration<'a>) -> Vec<ClassMember<'a>> {
        let mut members = Vec::new();
        for element in &clazz.body.body {
            match element {
                ast::ClassElement::MethodDefinition(method) => {
                    let kind = match method.kind {
                        ast::MethodDefinitionKind::Constructor => ClassMemberKind::Constructor,
                        ast::MethodDefinitionKind::Method => ClassMemberKind::Method,
                        ast::MethodDefinitionKind::Get => ClassMemberKind::Getter,
                        ast::MethodDefinitionKind::Set => ClassMemberKind::Setter,
                    };

                    let mut modifiers = ModifierFlags::empty();
                    modifiers.set(ModifierFlags::STATIC, method.r#static);

                    members.push(ClassMember {
                        kind,
                        access_level: AccessLevel::from_accessibility(method.accessibility),
                        modifiers,
                        type_node: None,
                        name: self.member_name(&method.key, method.computed),
                        value: None,
                        function: Some(&*method.value),
                    });
                }
                ast::ClassElement::PropertyDefinition(prop) => {
                    let mut modifiers = ModifierFlags::empty();
                    modifiers.set(ModifierFlags::STATIC, prop.r#static);
                    modifiers.set(ModifierFlags::READONLY, prop.readonly);

                    members.push(ClassMember {
                        kind: ClassMemberKind::Property,
                        access_level: AccessLevel::from_accessibility(prop.accessibility),
                        modifiers,
                        type_node: prop.type_annotation.as_ref().map(|t| &t.type_annotation),
                        name: self.member_name(&prop.key, prop.computed),
                        value: prop.value.as_ref(),
                        function: None,
                    });
                }
                // Static blocks, index signatures and `accessor` fields carry no metadata.
                _ => {}
            }
        }
        members
    }

    fn get_constructor_parameters(
        &self,
        clazz: &'a ClassDeclaration<'a>,
    ) -> Option<Vec<CtorParameter<'a>>> {
        let constructors: Vec<&'a ast::MethodDefinition<'a>> = clazz
            .body
            .body
            .iter()
            .filter_map(|element| match element {
                ast::ClassElement::MethodDefinition(method)
                    if method.kind == ast::MethodDefinitionKind::Constructor =>
                {
                    Some(&**method)
                }
                _ => None,
            })
            .collect();

        // Overload signatures have no body; the implementation does. Ambient
        // classes have only signatures, so the first one stands in.
        let constructor = constructors
            .iter()
            .copied()
            .find(|ctor| ctor.value.body.is_some())
            .or_else(|| constructors.first().copied())?;

        Some(self.convert_parameters(&constructor.value.params))
    }

    fn get_definition_of_function(&self, fn_node: &'a ast::Function<'a>) -> FunctionDefinition<'a> {
        let parameters = self
            .convert_parameters(&fn_node.params)
            .into_iter()
            .map(|param| Parameter {
                name: param.name,
                type_node: param.type_node,
            })
            .collect();

        FunctionDefinition {
            parameters,
            return_type: fn_node.return_type.as_ref().map(|t| &t.type_annotation),
        }
    }

    fn get_text(&self, span: Span) -> &'a str {
        &self.source[span.start as usize..span.end as usize]
    }
}
