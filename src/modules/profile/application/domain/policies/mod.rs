pub mod profile_rules;
