use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        source: regex::Error,
    },
    #[error("Pattern '{0}' needs a capture group for the identifier")]
    MissingCapture(String),
}

/// Compile a user-supplied regular expression.
pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Invalid {
        pattern: pattern.to_string(),
        source,
    })
}

/// Compile a pattern whose first capture group is read back out.
pub fn compile_capturing(pattern: &str) -> Result<Regex, PatternError> {
    let regex = compile(pattern)?;
    // captures_len counts the implicit whole-match group
    if regex.captures_len() < 2 {
        return Err(PatternError::MissingCapture(pattern.to_string()));
    }
    Ok(regex)
}
