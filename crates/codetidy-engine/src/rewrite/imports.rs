use regex::Regex;

use crate::pattern::{self, PatternError};

/// Import pulled in by files that use the query param helpers.
pub const DEFAULT_IMPORT_LINE: &str =
    "use crate::util::param::{extract_param, extract_param_str, is_valid_page, is_valid_size};";

/// Line that marks a file as needing [`DEFAULT_IMPORT_LINE`].
pub const DEFAULT_IMPORT_TRIGGER: &str = r#"let search = move \|\| query\.with\(\|q\| q\.get\("search"\)\.cloned\(\)\.unwrap_or_default\(\)\);"#;

/// Insert `line` at the top of any file containing a line matching `trigger`.
#[derive(Debug, Clone)]
pub struct ImportRule {
    trigger: Regex,
    line: String,
}

impl ImportRule {
    pub fn new(trigger: &str, line: &str) -> Result<Self, PatternError> {
        Ok(Self {
            trigger: pattern::compile(trigger)?,
            line: line.trim_end_matches(['\r', '\n']).to_string(),
        })
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}

impl Default for ImportRule {
    fn default() -> Self {
        Self::new(DEFAULT_IMPORT_TRIGGER, DEFAULT_IMPORT_LINE).expect("Invalid default import rule")
    }
}

/// Prepend the import when a trigger line is present.
///
/// Only the first line is checked for an existing import, so a file that
/// already imports it further down still gets a second copy at the top.
pub fn insert_import(content: &str, rule: &ImportRule) -> Option<String> {
    if !content.lines().any(|line| rule.trigger.is_match(line)) {
        return None;
    }

    let already_imported = content
        .lines()
        .next()
        .is_some_and(|first| first.contains(&rule.line));
    if already_imported {
        return None;
    }

    Some(format!("{}\n{content}", rule.line))
}
