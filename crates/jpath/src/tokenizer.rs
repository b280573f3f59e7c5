//! Splits a raw path string into its syntactic tokens.
//!
//! The tokenizer accepts the broad query grammar (`$`/`@` anchors, `..`
//! descent, `*`, bracketed selectors). Use [`crate::is_writable`] to check
//! whether a path can also be used for writes.
use crate::error::JPathError;

const WILDCARD: &str = "*";

/// Tokenizes `path` into anchors, field names, bracketed segments and
/// wildcards.
///
/// `$.store..book[0]` yields `["$", "store", "*", "book[0]"]`.
pub fn tokenize(path: &str) -> Result<Vec<String>, JPathError> {
    let mut chars = path.chars();
    let anchor = match chars.next() {
        Some(c @ ('$' | '@')) => c,
        _ => return Err(JPathError::syntax(path, "path should start with '$' or '@'")),
    };

    let mut tokens = vec![anchor.to_string()];
    let mut token = String::new();

    for c in chars {
        token.push(c);

        if token == "." {
            continue;
        }
        if token == ".." {
            push_wildcard(&mut tokens);
            token = ".".to_string();
            continue;
        }

        if token.contains('[') {
            if c == ']' && !token.ends_with("\\]") {
                tokens.push(strip_dot(&token).to_string());
                token.clear();
            }
        } else if c == '.' {
            let body = &token[..token.len() - 1];
            tokens.push(strip_dot(body).to_string());
            token = ".".to_string();
        }
    }

    let rest = strip_dot(&token);
    if rest == WILDCARD {
        push_wildcard(&mut tokens);
    } else if !rest.is_empty() {
        tokens.push(rest.to_string());
    }

    log::trace!("tokenized '{}' into {:?}", path, tokens);
    Ok(tokens)
}

fn push_wildcard(tokens: &mut Vec<String>) {
    if tokens.last().map(String::as_str) != Some(WILDCARD) {
        tokens.push(WILDCARD.to_string());
    }
}

fn strip_dot(token: &str) -> &str {
    token.strip_prefix('.').unwrap_or(token)
}
