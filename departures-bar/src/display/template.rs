//! Format templates with named fields.
//!
//! Templates use `{field}` placeholders with `{{` and `}}` as literal
//! braces. Each template declares which fields it may use, so a typo in a
//! configured template is caught before any request is made.

use std::fmt;

/// A value that can be substituted into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DepartureTime,
    DelayMinutes,
    Status,
}

impl Field {
    const ALL: [Field; 3] = [Field::DepartureTime, Field::DelayMinutes, Field::Status];

    pub fn name(self) -> &'static str {
        match self {
            Field::DepartureTime => "departure_time",
            Field::DelayMinutes => "delay_minutes",
            Field::Status => "status",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unknown field {{{0}}}")]
    UnknownField(String),

    #[error("field {{{0}}} is not available here")]
    FieldNotAllowed(Field),

    #[error("unclosed '{{'")]
    UnclosedBrace,

    #[error("single '}}' must be written as '}}}}'")]
    UnmatchedClosingBrace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed template.
///
/// # Examples
///
/// ```
/// use departures_bar::display::{Field, Template};
///
/// let template = Template::parse(
///     "{departure_time}: {delay_minutes}m late",
///     &[Field::DepartureTime, Field::DelayMinutes],
/// )
/// .unwrap();
///
/// let text = template.render(|field| match field {
///     Field::DepartureTime => "08:00".to_string(),
///     Field::DelayMinutes => 5.to_string(),
///     Field::Status => String::new(),
/// });
/// assert_eq!(text, "08:00: 5m late");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source`, permitting only the fields in `allowed`.
    pub fn parse(source: &str, allowed: &[Field]) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(TemplateError::UnmatchedClosingBrace),
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(TemplateError::UnclosedBrace),
                        }
                    }

                    let field = Field::from_name(&name)
                        .ok_or_else(|| TemplateError::UnknownField(name.clone()))?;
                    if !allowed.contains(&field) {
                        return Err(TemplateError::FieldNotAllowed(field));
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Render, asking `value` for each field the template uses.
    pub fn render(&self, value: impl Fn(Field) -> String) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&value(*field)),
            }
        }
        out
    }
}
