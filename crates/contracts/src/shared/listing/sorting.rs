use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("unknown sort field `{0}`")]
    UnknownField(String),
    #[error("sort selection `{0}` has no direction")]
    MissingDirection(String),
    #[error("invalid sort direction `{0}`, expected `asc` or `desc`")]
    InvalidDirection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(SortError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort field that was validated against a [`SortSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortField(String);

impl SortField {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Known sort fields of a list and the placeholder values of its sort selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSchema {
    fields: Vec<String>,
    placeholders: Vec<String>,
}

impl SortSchema {
    pub fn new<F, P>(fields: F, placeholders: P) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            placeholders: placeholders.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn is_placeholder(&self, raw: &str) -> bool {
        let raw = raw.trim();
        self.placeholders.iter().any(|p| p.trim() == raw)
    }

    pub fn field(&self, raw: &str) -> Result<SortField, SortError> {
        let raw = raw.trim();
        self.fields
            .iter()
            .find(|known| known.as_str() == raw)
            .map(|known| SortField(known.clone()))
            .ok_or_else(|| SortError::UnknownField(raw.to_string()))
    }

    /// Parse the value of a field-only selector. The direction comes from
    /// elsewhere (the direction toggle).
    pub fn parse_field(
        &self,
        raw: &str,
        direction: SortDirection,
    ) -> Result<SortSelection, SortError> {
        if self.is_placeholder(raw) {
            return Ok(SortSelection::Placeholder);
        }
        let field = self.field(raw)?;
        Ok(SortSelection::Sort(SortState::new(field, direction)))
    }

    /// Parse a combined `field-direction` value, split on the first hyphen.
    pub fn parse_combined(&self, raw: &str) -> Result<SortSelection, SortError> {
        if self.is_placeholder(raw) {
            return Ok(SortSelection::Placeholder);
        }
        let raw = raw.trim();
        let (field, direction) = raw
            .split_once('-')
            .ok_or_else(|| SortError::MissingDirection(raw.to_string()))?;
        let field = self.field(field)?;
        let direction = direction.parse()?;
        Ok(SortSelection::Sort(SortState::new(field, direction)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn with_direction(&self, direction: SortDirection) -> Self {
        Self {
            field: self.field.clone(),
            direction,
        }
    }

    /// Combined selector form, e.g. `name-asc`
    pub fn combined(&self) -> String {
        format!("{}-{}", self.field, self.direction)
    }
}

/// Outcome of reading a sort selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortSelection {
    /// The selector shows its "choose…" entry
    Placeholder,
    Sort(SortState),
}

impl SortSelection {
    pub fn into_state(self) -> Option<SortState> {
        match self {
            SortSelection::Placeholder => None,
            SortSelection::Sort(state) => Some(state),
        }
    }
}
