//! Indentation helpers.

/// Guess the indentation unit of `code`: a tab when tab-indented lines are at least as
/// common as lines indented by two or more spaces, otherwise the smallest such run of
/// spaces. `None` when no line is indented.
pub(crate) fn guess_indent(code: &str) -> Option<String> {
    let mut tabbed = 0usize;
    let mut spaced = Vec::new();
    for line in code.split('\n') {
        if line.starts_with('\t') {
            tabbed += 1;
        } else if line.starts_with("  ") {
            spaced.push(line.len() - line.trim_start_matches(' ').len());
        }
    }

    if tabbed == 0 && spaced.is_empty() {
        return None;
    }
    if tabbed >= spaced.len() {
        return Some("\t".to_string());
    }
    spaced.into_iter().min().map(|width| " ".repeat(width))
}

/// Prefix every non-empty line of `text` with `indent`.
///
/// `should_indent` carries across calls: it says whether the next line start still
/// needs indenting, and a line start that is skipped re-arms it.
pub(crate) fn indent_lines(text: &str, indent: &str, should_indent: &mut bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_line_start = true;
    for ch in text.chars() {
        if at_line_start && ch != '\n' && ch != '\r' {
            if *should_indent {
                out.push_str(indent);
            } else {
                *should_indent = true;
            }
        }
        out.push(ch);
        at_line_start = ch == '\n' || ch == '\r';
    }
    out
}
