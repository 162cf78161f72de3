pub mod contact_rules;
