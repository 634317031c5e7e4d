//! Template expansion.
//!
//! Two passes over the program template: environment variables first
//! (`%NAME%` on Windows, `$NAME`/`${NAME}` elsewhere), then positional
//! placeholders. Argument templates only get the placeholder pass. The two
//! passes are independent, so env references and placeholders can share a
//! template without interfering.
//!
//! There is no escape for a literal `{` or `}`; a brace that does not form a
//! valid placeholder is an error.

use crate::error::{Error, Result};
use crate::url_parts::UrlParts;

/// Substitutes `{0}` with the protocol and `{1}` with the address.
///
/// Only those two slots exist. Any other brace construct (unclosed `{`,
/// stray `}`, empty or non-numeric or out-of-range index) fails with
/// [`Error::Format`].
pub fn expand(template: &str, parts: &UrlParts) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                let mut index = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(d) => index.push(d),
                        None => return Err(format_error(template, "unclosed '{'")),
                    }
                }
                match index.parse::<usize>() {
                    Ok(0) => out.push_str(&parts.protocol),
                    Ok(1) => out.push_str(&parts.address),
                    Ok(n) => {
                        return Err(format_error(
                            template,
                            format!("index {n} out of range, only {{0}} and {{1}} exist"),
                        ))
                    }
                    Err(_) => {
                        return Err(format_error(
                            template,
                            format!("'{{{index}}}' is not a numeric placeholder"),
                        ))
                    }
                }
            }
            '}' => return Err(format_error(template, "unmatched '}'")),
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Expands the program template: environment variables, then placeholders.
pub fn expand_filename(template: &str, parts: &UrlParts) -> Result<String> {
    let expanded = expand(&expand_env(template), parts)?;
    tracing::info!("filename: {}", expanded);
    Ok(expanded)
}

/// Replaces environment-variable references using the platform syntax.
/// References to undefined variables are left verbatim. Never fails.
pub fn expand_env(template: &str) -> String {
    expand_env_with(template, |name| std::env::var(name).ok())
}

fn format_error(template: &str, detail: impl Into<String>) -> Error {
    Error::Format {
        template: template.to_string(),
        detail: detail.into(),
    }
}

#[cfg(windows)]
fn expand_env_with(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    // `%NAME%` pairs. A lone `%`, an empty name, or an undefined variable
    // leaves the text untouched and scanning resumes after the opening `%`.
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('%') {
            Some(end) if end > 0 => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => {
                        out.push_str(&value);
                        rest = &after[end + 1..];
                    }
                    None => {
                        out.push('%');
                        rest = after;
                    }
                }
            }
            _ => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(not(windows))]
fn expand_env_with(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    // `$NAME` and `${NAME}`. Undefined variables are left verbatim, as the
    // Windows side does, so a template behaves the same way on both.
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&(brace_start, '{')) => {
                let inner_start = brace_start + 1;
                match template[inner_start..].find('}') {
                    Some(len) => {
                        let name = &template[inner_start..inner_start + len];
                        match lookup(name) {
                            Some(value) => out.push_str(&value),
                            None => {
                                out.push_str(&template[brace_start - 1..inner_start + len + 1])
                            }
                        }
                        // Skip past the closing brace.
                        let close = inner_start + len;
                        while chars.next_if(|&(i, _)| i <= close).is_some() {}
                    }
                    None => out.push('$'),
                }
            }
            Some(&(name_start, d)) if d.is_ascii_alphabetic() || d == '_' => {
                let mut name_end = name_start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        name_end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let name = &template[name_start..name_end];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('$');
                        out.push_str(name);
                    }
                }
            }
            _ => out.push('$'),
        }
    }
    out
}
