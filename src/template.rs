//! Placeholder substitution for corpus patterns.
//!
//! Hook, angle, CTA and comment-prompt patterns use `{variable}` placeholders
//! that are filled from a variable dictionary.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! # Rendering modes
//!
//! [`render_template`] is strict: an undefined variable is an error. The lint
//! and the CTA matrix tests use it. [`render_lenient`] never fails: unknown
//! placeholders are left in the output verbatim and reported back so the
//! board assembler can log them instead of aborting a whole board.

use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::LazyLock;

/// Matches a placeholder marker that survived rendering.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*[A-Za-z_][A-Za-z0-9_]*\s*\}").expect("marker regex is valid")
});

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// The position in the template where the variable was found.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// The position of the unmatched `{`.
        position: usize,
    },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName {
        /// The position of the empty variable.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// One lexical piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Literal(char),
    Variable { name: &'a str, position: usize },
}

/// Split a pattern into literals and variable references.
fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    segments.push(Segment::Literal('{'));
                    continue;
                }

                let name_start = pos + 1;
                let mut name_end = None;
                for (end, c) in chars.by_ref() {
                    if c == '}' {
                        name_end = Some(end);
                        break;
                    }
                }
                let Some(name_end) = name_end else {
                    return Err(TemplateError::UnmatchedBrace { position: pos });
                };

                let raw = &template[name_start..name_end];
                if raw.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }
                // Whitespace around the name is tolerated
                segments.push(Segment::Variable {
                    name: raw.trim(),
                    position: pos,
                });
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                segments.push(Segment::Literal('}'));
            }
            _ => segments.push(Segment::Literal(ch)),
        }
    }

    Ok(segments)
}

/// Render a pattern by substituting variables; undefined variables are errors.
///
/// # Examples
///
/// ```
/// use hookplan::template::{render_template, vars};
///
/// let vars = vars([("audience", "B2B founders"), ("help_with", "close more deals")]);
/// let result = render_template("{audience} who want to {help_with}", &vars).unwrap();
/// assert_eq!(result, "B2B founders who want to close more deals");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    for segment in parse(template)? {
        match segment {
            Segment::Literal(c) => result.push(c),
            Segment::Variable { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }

    Ok(result)
}

/// Output of [`render_lenient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The rendered text. Unknown placeholders are kept as `{name}`.
    pub text: String,
    /// Names of variables that had no value, in order of appearance.
    pub missing: Vec<String>,
}

/// Render a pattern without failing.
///
/// Unknown placeholders are copied through as `{name}` and listed in
/// [`Rendered::missing`]. A malformed pattern is returned verbatim with no
/// substitution.
pub fn render_lenient(template: &str, variables: &HashMap<String, String>) -> Rendered {
    let segments = match parse(template) {
        Ok(segments) => segments,
        Err(_) => {
            return Rendered {
                text: template.to_string(),
                missing: Vec::new(),
            };
        }
    };

    let mut text = String::with_capacity(template.len());
    let mut missing = Vec::new();
    for segment in segments {
        match segment {
            Segment::Literal(c) => text.push(c),
            Segment::Variable { name, .. } => match variables.get(name) {
                Some(value) => text.push_str(value),
                None => {
                    text.push('{');
                    text.push_str(name);
                    text.push('}');
                    missing.push(name.to_string());
                }
            },
        }
    }

    Rendered { text, missing }
}

/// List the distinct variable names a pattern references.
pub fn placeholders(template: &str) -> Result<BTreeSet<String>, TemplateError> {
    Ok(parse(template)?
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Variable { name, .. } => Some(name.to_string()),
            Segment::Literal(_) => None,
        })
        .collect())
}

/// Return the placeholder markers found in already-rendered text.
pub fn leaked_markers(text: &str) -> Vec<&str> {
    MARKER.find_iter(text).map(|m| m.as_str()).collect()
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
