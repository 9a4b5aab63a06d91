// Declarative form validation
//
// A `Schema` lists each field with an ordered set of rules. Validation stops
// at the first failing rule per field and collects one message per field.
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

pub mod schemas;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(_) => false,
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

/// Raw form input, keyed by the field names the schemas use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: BTreeMap<String, FieldValue>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, FieldValue::Text(value.into()));
        self
    }

    pub fn with_flag(mut self, name: &str, value: bool) -> Self {
        self.set(name, FieldValue::Flag(value));
        self
    }

    pub fn with_list<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(name, FieldValue::List(values.into_iter().map(Into::into).collect()));
        self
    }

    pub fn set(&mut self, name: &str, value: FieldValue) {
        self.fields.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text content of a field, or `""` when it is absent or not text.
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    /// `None` for absent or empty text.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        Some(self.text(name))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn list(&self, name: &str) -> &[String] {
        match self.fields.get(name) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Pattern(&'static Regex, &'static str),
    Email(&'static str),
    EqualsField(&'static str, &'static str),
    MinItems(usize, &'static str),
}

impl Rule {
    /// Returns the rule's message when `name` in `data` violates it.
    fn check(&self, name: &str, data: &FormData) -> Option<&'static str> {
        let text = data.text(name);
        let passed = match self {
            Rule::Required(_) => data.get(name).is_some_and(|v| !v.is_blank()),
            Rule::MinLength(min, _) => text.chars().count() >= *min,
            Rule::MaxLength(max, _) => text.chars().count() <= *max,
            Rule::Pattern(re, _) => re.is_match(text),
            Rule::Email(_) => crate::utils::validate_email(text),
            Rule::EqualsField(other, _) => text == data.text(other),
            Rule::MinItems(min, _) => data.list(name).len() >= *min,
        };

        if passed {
            None
        } else {
            Some(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Rule::Required(msg)
            | Rule::MinLength(_, msg)
            | Rule::MaxLength(_, msg)
            | Rule::Pattern(_, msg)
            | Rule::Email(msg)
            | Rule::EqualsField(_, msg)
            | Rule::MinItems(_, msg) => msg,
        }
    }
}

#[derive(Debug, Clone)]
struct FieldSpec {
    name: &'static str,
    optional: bool,
    rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldSpec {
            name,
            optional: false,
            rules,
        });
        self
    }

    /// Optional fields skip their rules when absent or empty.
    pub fn optional(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldSpec {
            name,
            optional: true,
            rules,
        });
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn validate(&self, data: &FormData) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in &self.fields {
            let blank = data.get(field.name).map_or(true, FieldValue::is_blank);
            if field.optional && blank {
                continue;
            }

            if let Some(msg) = field.rules.iter().find_map(|rule| rule.check(field.name, data)) {
                errors.insert(field.name, msg);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Checks a single field, for inline feedback while the user types.
    pub fn validate_field(&self, name: &str, data: &FormData) -> Option<&'static str> {
        let field = self.fields.iter().find(|f| f.name == name)?;
        let blank = data.get(name).map_or(true, FieldValue::is_blank);
        if field.optional && blank {
            return None;
        }
        field.rules.iter().find_map(|rule| rule.check(name, data))
    }
}

/// Field name to the message of its first violated rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A typed record that can be built from validated form input.
pub trait FormSchema: Sized {
    fn schema() -> &'static Schema;

    /// Only called after `schema()` accepted `data`.
    fn from_form(data: &FormData) -> Self;
}

pub fn parse<T: FormSchema>(data: &FormData) -> Result<T, ValidationErrors> {
    T::schema().validate(data)?;
    Ok(T::from_form(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;

    static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

    fn schema() -> Schema {
        Schema::new()
            .field(
                "code",
                vec![
                    Rule::MinLength(2, "too short"),
                    Rule::Pattern(&DIGITS, "digits only"),
                ],
            )
            .optional("nickname", vec![Rule::MinLength(3, "nickname too short")])
            .field("tags", vec![Rule::MinItems(1, "pick a tag")])
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let data = FormData::new().with_text("code", "x").with_list("tags", ["a"]);
        let errors = schema().validate(&data).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("code"), Some("too short"));
    }

    #[test]
    fn test_optional_field_skipped_when_empty() {
        let data = FormData::new()
            .with_text("code", "42")
            .with_text("nickname", "")
            .with_list("tags", ["seo"]);
        assert!(schema().validate(&data).is_ok());

        let data = data.with_text("nickname", "ab");
        let errors = schema().validate(&data).unwrap_err();
        assert_eq!(errors.get("nickname"), Some("nickname too short"));
    }

    #[test]
    fn test_missing_fields_are_checked_as_empty() {
        let errors = schema().validate(&FormData::new()).unwrap_err();

        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![("code", "too short"), ("tags", "pick a tag")]
        );
    }

    #[test]
    fn test_validate_field_matches_full_validation() {
        let data = FormData::new().with_text("code", "4a");
        assert_eq!(schema().validate_field("code", &data), Some("digits only"));
        assert_eq!(schema().validate_field("nickname", &data), None);
        assert_eq!(schema().validate_field("unknown", &data), None);
    }
}
