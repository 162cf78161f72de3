pub mod project_rules;
