//! Declarative form checks, evaluated before anything is sent to the API.

pub mod schemas;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use reqwest::Url;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Url(&'static str),
    Email(&'static str),
}

impl Rule {
    /// The rule's message when `value` breaks it.
    fn check(&self, value: &str) -> Option<&'static str> {
        let broken = match *self {
            Rule::Required(_) => value.is_empty(),
            Rule::MinLength(min, _) => value.chars().count() < min,
            Rule::MaxLength(max, _) => value.chars().count() > max,
            Rule::Url(_) => !is_url(value),
            Rule::Email(_) => !is_email(value),
        };

        broken.then_some(self.message())
    }

    fn message(&self) -> &'static str {
        match *self {
            Rule::Required(message)
            | Rule::MinLength(_, message)
            | Rule::MaxLength(_, message)
            | Rule::Url(message)
            | Rule::Email(message) => message,
        }
    }
}

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn is_email(value: &str) -> bool {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}

fn is_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| url.has_host() && matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

impl Field {
    fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, Rule::Required(_) | Rule::MinLength(..)))
    }

    fn validate(&self, value: &str) -> Option<&'static str> {
        let value = value.trim();

        // optional fields may be left empty
        if value.is_empty() && !self.is_required() {
            return None;
        }

        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [Field],
}

impl Schema {
    /// Checks every field against `values`, a missing value counts as empty.
    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
        let errors = self
            .fields
            .iter()
            .filter_map(|field| {
                let value = values.get(field.name).map_or("", String::as_str);

                field
                    .validate(value)
                    .map(|message| (field.name, message.to_string()))
            })
            .collect::<BTreeMap<_, _>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Checks a single field, used while the user is still typing.
    pub fn check(&self, field: &str, value: &str) -> Result<(), String> {
        match self.fields.iter().find(|f| f.name == field) {
            Some(field) => field
                .validate(value)
                .map_or(Ok(()), |message| Err(message.to_string())),
            None => Ok(()),
        }
    }
}

pub type FormValues = BTreeMap<&'static str, String>;

/// Field name to the first message it failed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn single(field: &'static str, message: &str) -> Self {
        Self(BTreeMap::from([(field, message.to_string())]))
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid input")?;

        for (field, message) in &self.0 {
            write!(f, "\n  {field}: {message}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
