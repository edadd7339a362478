//! Rendering departures into the status bar line.

use std::fmt;

use crate::domain::{Departure, DepartureStatus};

use super::template::{Field, Template, TemplateError};

/// Which of the three templates a service is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    OnTime,
    KnownDelay,
    Other,
}

impl TemplateKind {
    /// Fields each template is allowed to reference.
    pub fn allowed_fields(self) -> &'static [Field] {
        match self {
            TemplateKind::OnTime => &[Field::DepartureTime],
            TemplateKind::KnownDelay => &[Field::DepartureTime, Field::DelayMinutes],
            TemplateKind::Other => &[Field::DepartureTime, Field::Status],
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemplateKind::OnTime => "on-time",
            TemplateKind::KnownDelay => "known-delay",
            TemplateKind::Other => "other-status",
        })
    }
}

/// One service's display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedService {
    pub text: String,
    pub alert: bool,
}

/// Everything needed to turn departures into a status line.
#[derive(Debug, Clone)]
pub struct Formats {
    on_time: Template,
    known_delay: Template,
    other: Template,
    separator: String,
    alert_color: String,
}

impl Formats {
    /// Parse the three templates, checking each only uses its own fields.
    pub fn parse(
        on_time: &str,
        known_delay: &str,
        other: &str,
        separator: impl Into<String>,
        alert_color: impl Into<String>,
    ) -> Result<Self, (TemplateKind, TemplateError)> {
        let parse = |kind: TemplateKind, source: &str| {
            Template::parse(source, kind.allowed_fields()).map_err(|e| (kind, e))
        };

        Ok(Self {
            on_time: parse(TemplateKind::OnTime, on_time)?,
            known_delay: parse(TemplateKind::KnownDelay, known_delay)?,
            other: parse(TemplateKind::Other, other)?,
            separator: separator.into(),
            alert_color: alert_color.into(),
        })
    }

    /// Render a single departure.
    pub fn render(&self, departure: &Departure) -> RenderedService {
        let scheduled = departure.scheduled.as_str();

        let text = match &departure.status {
            DepartureStatus::OnTime => self.on_time.render(|field| match field {
                Field::DepartureTime => scheduled.to_string(),
                _ => String::new(),
            }),
            DepartureStatus::Delayed { minutes } => self.known_delay.render(|field| match field {
                Field::DepartureTime => scheduled.to_string(),
                Field::DelayMinutes => minutes.to_string(),
                Field::Status => String::new(),
            }),
            DepartureStatus::Other(status) => self.other.render(|field| match field {
                Field::DepartureTime => scheduled.to_string(),
                Field::Status => status.clone(),
                Field::DelayMinutes => String::new(),
            }),
        };

        RenderedService {
            text,
            alert: departure.status.is_alert(),
        }
    }

    /// Render all departures into the status line.
    pub fn render_all(&self, departures: &[Departure]) -> StatusLine {
        StatusLine {
            services: departures.iter().map(|d| self.render(d)).collect(),
            separator: self.separator.clone(),
            alert_color: self.alert_color.clone(),
        }
    }
}

/// The rendered status bar line.
///
/// Displays as the service texts joined by the separator, followed by
/// ` | color=<alert_color>` when any service is an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    services: Vec<RenderedService>,
    separator: String,
    alert_color: String,
}

impl StatusLine {
    pub fn services(&self) -> &[RenderedService] {
        &self.services
    }

    pub fn has_alerts(&self) -> bool {
        self.services.iter().any(|s| s.alert)
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, service) in self.services.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            f.write_str(&service.text)?;
        }

        if self.has_alerts() {
            write!(f, " | color={}", self.alert_color)?;
        }

        Ok(())
    }
}
