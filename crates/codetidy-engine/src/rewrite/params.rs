use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Helper the rewritten closures call.
pub const DEFAULT_PARAM_HELPER: &str = "extract_param_str";

fn query_param_regex() -> &'static Regex {
    static QUERY_PARAM_REGEX: OnceLock<Regex> = OnceLock::new();
    QUERY_PARAM_REGEX.get_or_init(|| {
        Regex::new(
            r#"let (\w+) = move \|\| query\.with\(\|q\| q\.get\("(\w+)"\)\.cloned\(\)\.unwrap_or_default\(\)\);"#,
        )
        .expect("Invalid query param regex")
    })
}

/// Replace hand-written query lookups with a call to `helper`.
///
/// `let page = move || query.with(|q| q.get("page").cloned().unwrap_or_default());`
/// becomes `let page = move || extract_param_str(&query, "page");`.
///
/// Returns `None` when the content has no lookups to rewrite.
pub fn rewrite_query_params(content: &str, helper: &str) -> Option<String> {
    let rewritten = query_param_regex().replace_all(content, |caps: &Captures| {
        format!("let {} = move || {helper}(&query, \"{}\");", &caps[1], &caps[2])
    });

    if rewritten == content {
        None
    } else {
        Some(rewritten.into_owned())
    }
}
