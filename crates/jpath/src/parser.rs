//! Compiles a path string into an [`Expression`].
use super::ast::{Expression, Step};
use crate::error::JPathError;
use nom::{
    IResult, Parser,
    bytes::complete::take_while,
    character::complete::{char, u64 as nom_u64},
    combinator::map_res,
    sequence::delimited,
};
use std::str::FromStr;

// --- Main Public Parser ---

/// Compiles `path` into a reusable expression.
///
/// Leading `$` and `.` characters are stripped; what remains is split on `.`
/// and each segment becomes a [`Step`]. An empty remainder denotes the root.
pub fn compile(path: &str) -> Result<Expression, JPathError> {
    let body = path.trim_start_matches(|c: char| c == '$' || c == '.');
    if body.is_empty() {
        return Ok(Expression::root());
    }

    let steps = body
        .split('.')
        .map(|segment| resolve_step(path, segment))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Expression::from_steps(steps))
}

impl FromStr for Expression {
    type Err = JPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

fn resolve_step(path: &str, segment: &str) -> Result<Step, JPathError> {
    if segment.is_empty() {
        return Err(JPathError::syntax(path, "empty segment"));
    }

    let (rest, key) = field_key(segment)?;
    if rest.is_empty() {
        return Ok(Step::Field(key.to_string()));
    }

    match index_suffix(rest) {
        Ok(("", index)) => Ok(Step::Index {
            key: key.to_string(),
            index,
        }),
        Ok((trailing, _)) => Err(JPathError::syntax(
            path,
            format!("unexpected '{}' after index in segment '{}'", trailing, segment),
        )),
        Err(_) => Err(JPathError::InvalidIndex {
            path: path.to_string(),
            segment: segment.to_string(),
        }),
    }
}

// --- Combinators ---

fn field_key(input: &str) -> Result<(&str, &str), JPathError> {
    let parsed: IResult<&str, &str> = take_while(|c: char| c != '[').parse(input);
    parsed.map_err(|e| JPathError::syntax(input, e.to_string()))
}

fn index_suffix(input: &str) -> IResult<&str, usize> {
    delimited(char('['), map_res(nom_u64, usize::try_from), char(']')).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(key: &str) -> Step {
        Step::Field(key.to_string())
    }

    fn index(key: &str, index: usize) -> Step {
        Step::Index {
            key: key.to_string(),
            index,
        }
    }

    #[test]
    fn test_root_forms() {
        for path in ["$", "$.", ""] {
            let expr = compile(path).unwrap();
            assert!(expr.is_root(), "'{}' should be root", path);
            assert!(expr.steps().is_empty());
        }
    }

    #[test]
    fn test_fields_and_indices_in_order() {
        let expr = compile("$.a.b[2].c").unwrap();
        assert!(!expr.is_root());
        assert_eq!(expr.steps(), &[field("a"), index("b", 2), field("c")]);
    }

    #[test]
    fn test_anonymous_root_index() {
        let expr = compile("$[0].x").unwrap();
        assert_eq!(expr.steps(), &[index("", 0), field("x")]);
        assert!(expr.steps()[0].is_anonymous_index());
    }

    #[test]
    fn test_non_integer_index_is_rejected() {
        assert!(matches!(compile("$.a[x]"), Err(JPathError::InvalidIndex { .. })));
        assert!(matches!(compile("$.a[-1]"), Err(JPathError::InvalidIndex { .. })));
        assert!(matches!(compile("$.a[]"), Err(JPathError::InvalidIndex { .. })));
        assert!(matches!(compile("$.a[1"), Err(JPathError::InvalidIndex { .. })));
    }

    #[test]
    fn test_trailing_text_after_index_is_rejected() {
        assert!(matches!(compile("$.a[1]b"), Err(JPathError::Syntax { .. })));
        assert!(matches!(compile("$[0][1]"), Err(JPathError::Syntax { .. })));
    }

    #[test]
    fn test_empty_segment_is_rejected() {
        assert!(matches!(compile("$.a..b"), Err(JPathError::Syntax { .. })));
        assert!(matches!(compile("$.a."), Err(JPathError::Syntax { .. })));
    }

    #[test]
    fn test_from_str_and_display() {
        let expr: Expression = "$[1].items[0].name".parse().unwrap();
        assert_eq!(expr.to_string(), "$[1].items[0].name");
        assert_eq!(Expression::root().to_string(), "$");
    }
}
