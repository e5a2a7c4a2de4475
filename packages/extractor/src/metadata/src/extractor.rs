// Class Extractor
//
// Projects the classes of a parsed program into `ClassRecord`s through a
// `ReflectionHost`.

use oxc_ast::ast;

use super::model::*;
use crate::logging::{LogLevel, Logger};
use crate::reflection::src::util::{access_level_to_string, widened_literal_type};
use crate::reflection::{
    ClassDeclaration, ClassMember, ClassMemberKind, Decorator, ReflectionHost,
};

/// Type text used when a declaration has no annotation TypeScript could
/// widen from.
pub const IMPLICIT_TYPE: &str = "any";

/// Extracts class metadata records from a parsed program.
pub struct ClassExtractor<'l> {
    logger: &'l dyn Logger,
}

impl<'l> ClassExtractor<'l> {
    pub fn new(logger: &'l dyn Logger) -> Self {
        Self { logger }
    }

    /// One record per top-level class declaration, in source order.
    pub fn extract<'a, H>(&self, host: &H, program: &'a ast::Program<'a>) -> Vec<ClassRecord>
    where
        H: ReflectionHost<'a>,
    {
        host.get_classes(program)
            .into_iter()
            .map(|clazz| self.extract_class(host, clazz))
            .collect()
    }

    pub fn extract_class<'a, H>(&self, host: &H, clazz: &'a ClassDeclaration<'a>) -> ClassRecord
    where
        H: ReflectionHost<'a>,
    {
        let members = host.get_members_of_class(clazz);

        let record = ClassRecord {
            name: host.get_name_of_class(clazz).map(str::to_string),
            decorators: fragments(&host.get_decorators_of_class(clazz)),
            extends: host.get_base_class_text(clazz).map(SourceFragment::new),
            implements: host
                .get_implemented_types(clazz)
                .into_iter()
                .map(SourceFragment::new)
                .collect(),
            properties: self.extract_properties(host, &members),
            constructor_params: self.extract_constructor_params(host, clazz),
            methods: self.extract_methods(host, &members),
        };

        self.logger.debug(&format!(
            "class {}: {} decorators, {} properties, {} constructor params, {} methods",
            record.name.as_deref().unwrap_or("<anonymous>"),
            record.decorators.len(),
            record.properties.len(),
            record.constructor_params.len(),
            record.methods.len(),
        ));

        record
    }

    fn extract_properties<'a, H>(&self, host: &H, members: &[ClassMember<'a>]) -> Vec<PropertyRecord>
    where
        H: ReflectionHost<'a>,
    {
        members
            .iter()
            .filter(|member| member.kind == ClassMemberKind::Property)
            .map(|member| {
                let declared_type = match (member.type_node, member.value) {
                    (Some(type_node), _) => SourceFragment::new(host.get_type_text(type_node)),
                    (None, Some(value)) => {
                        SourceFragment::new(widened_literal_type(value).unwrap_or(IMPLICIT_TYPE))
                    }
                    (None, None) => SourceFragment::new(IMPLICIT_TYPE),
                };

                if self.logger.is_enabled(LogLevel::Debug) {
                    self.logger.debug(&format!(
                        "  property {} {}: {}",
                        access_level_to_string(member.access_level),
                        member.name,
                        declared_type
                    ));
                }

                PropertyRecord {
                    name: member.name.clone(),
                    declared_type,
                    is_readonly: member.is_readonly(),
                    is_static: member.is_static(),
                    access: member.access_level,
                }
            })
            .collect()
    }

    fn extract_constructor_params<'a, H>(
        &self,
        host: &H,
        clazz: &'a ClassDeclaration<'a>,
    ) -> Vec<ParameterRecord>
    where
        H: ReflectionHost<'a>,
    {
        host.get_constructor_parameters(clazz)
            .unwrap_or_default()
            .into_iter()
            .map(|param| ParameterRecord {
                name: param.name.to_string(),
                declared_type: type_fragment(host, param.type_node),
                decorators: fragments(&param.decorators),
            })
            .collect()
    }

    fn extract_methods<'a, H>(&self, host: &H, members: &[ClassMember<'a>]) -> Vec<MethodRecord>
    where
        H: ReflectionHost<'a>,
    {
        let methods: Vec<&ClassMember<'a>> = members
            .iter()
            .filter(|member| member.kind == ClassMemberKind::Method)
            .collect();

        let mut records = Vec::with_capacity(methods.len());
        for (index, method) in methods.iter().enumerate() {
            if is_overload_signature(method, &methods[index + 1..]) {
                continue;
            }
            let Some(function) = method.function else {
                continue;
            };

            let definition = host.get_definition_of_function(function);
            records.push(MethodRecord {
                name: method.name.clone(),
                return_type: type_fragment(host, definition.return_type),
                parameters: definition
                    .parameters
                    .into_iter()
                    .map(|param| MethodParameterRecord {
                        name: param.name.to_string(),
                        declared_type: type_fragment(host, param.type_node),
                    })
                    .collect(),
            });
        }
        records
    }
}

/// A bodyless method followed by a same-named implementation is an overload
/// signature. Bodyless methods without one (abstract, ambient) are kept.
fn is_overload_signature(method: &ClassMember<'_>, later: &[&ClassMember<'_>]) -> bool {
    !method.has_body()
        && later.iter().any(|other| {
            other.name == method.name && other.is_static() == method.is_static() && other.has_body()
        })
}

fn fragments(decorators: &[Decorator<'_>]) -> Vec<SourceFragment> {
    decorators.iter().map(|d| SourceFragment::new(d.text)).collect()
}

fn type_fragment<'a, H>(host: &H, type_node: Option<&'a ast::TSType<'a>>) -> SourceFragment
where
    H: ReflectionHost<'a>,
{
    SourceFragment::new(type_node.map_or(IMPLICIT_TYPE, |t| host.get_type_text(t)))
}
