// Role Detection
//
// Coarse classification of extracted classes for diagnostics. Roles never
// appear in the emitted JSON.

use std::fmt;

use super::model::ClassRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRole {
    Controller,
    Repository,
    Service,
    Dto,
    Entity,
    Unclassified,
}

impl ClassRole {
    /// Checks run in a fixed order and the first match wins: controller,
    /// repository, service, DTO, entity.
    pub fn detect(record: &ClassRecord) -> Self {
        let decorator_names: Vec<String> = record
            .decorators
            .iter()
            .filter_map(|d| d.decorator_name())
            .map(|name| name.rsplit('.').next().unwrap_or(name).trim().to_ascii_lowercase())
            .collect();
        let has_decorator = |wanted: &str| decorator_names.iter().any(|name| name == wanted);
        let name = record.name.as_deref().unwrap_or_default();

        if has_decorator("controller") {
            ClassRole::Controller
        } else if name.to_ascii_lowercase().ends_with("repository") || has_decorator("repository") {
            ClassRole::Repository
        } else if has_decorator("service") || has_decorator("injectable") {
            ClassRole::Service
        } else if name.ends_with("Dto") && record.decorators.is_empty() {
            ClassRole::Dto
        } else if has_decorator("entity") {
            ClassRole::Entity
        } else {
            ClassRole::Unclassified
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassRole::Controller => "controller",
            ClassRole::Repository => "repository",
            ClassRole::Service => "service",
            ClassRole::Dto => "dto",
            ClassRole::Entity => "entity",
            ClassRole::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for ClassRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
