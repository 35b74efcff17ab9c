// ABOUTME: Validated input buffers and the rules that sanitize them
// ABOUTME: Raw values stay editable; rules are only consulted when the caller commits

use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Returned by [`ValidatedField::commit_if_valid`] when the sanitized value is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Value failed validation")]
pub struct Invalid;

/// A pure sanitize/validate pair applied to a value before it is accepted
pub trait Validation {
    type Value;

    /// Check a (sanitized) value
    fn validate(&self, value: &Self::Value) -> bool;

    /// Transform a value into its canonical form
    fn sanitize(&self, value: Self::Value) -> Self::Value;
}

/// Which ends of a string [`WhitespaceValidation`] trims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WhitespaceOptions {
    pub leading: bool,
    pub trailing: bool,
}

impl WhitespaceOptions {
    pub const LEADING: Self = Self {
        leading: true,
        trailing: false,
    };

    pub const TRAILING: Self = Self {
        leading: false,
        trailing: true,
    };

    pub const ALL: Self = Self {
        leading: true,
        trailing: true,
    };
}

/// Trims whitespace and rejects empty strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceValidation {
    options: WhitespaceOptions,
}

impl WhitespaceValidation {
    pub const fn new(options: WhitespaceOptions) -> Self {
        Self { options }
    }

    /// Trim leading whitespace only
    pub const fn leading() -> Self {
        Self::new(WhitespaceOptions::LEADING)
    }

    /// Trim trailing whitespace only
    pub const fn trailing() -> Self {
        Self::new(WhitespaceOptions::TRAILING)
    }

    /// Trim both ends
    pub const fn all() -> Self {
        Self::new(WhitespaceOptions::ALL)
    }

    pub fn options(&self) -> WhitespaceOptions {
        self.options
    }
}

impl Validation for WhitespaceValidation {
    type Value = String;

    fn validate(&self, value: &String) -> bool {
        !value.is_empty()
    }

    fn sanitize(&self, mut value: String) -> String {
        if self.options.trailing {
            let end = value.trim_end().len();
            value.truncate(end);
        }
        if self.options.leading {
            let start = value.len() - value.trim_start().len();
            value.replace_range(..start, "");
        }
        value
    }
}

/// Caps a string at a number of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLength {
    pub max_chars: usize,
}

impl MaxLength {
    pub const fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl Validation for MaxLength {
    type Value = String;

    fn validate(&self, value: &String) -> bool {
        value.chars().count() <= self.max_chars
    }

    fn sanitize(&self, mut value: String) -> String {
        if let Some((idx, _)) = value.char_indices().nth(self.max_chars) {
            value.truncate(idx);
        }
        value
    }
}

/// Editable value paired with an ordered list of validation rules
///
/// The raw value can always be overwritten. Sanitization and validation are
/// derived on demand: rules sanitize in the order they were added, each one
/// consuming the previous output, and every rule then validates the final
/// result. Nothing is checked until [`commit_if_valid`](Self::commit_if_valid).
pub struct ValidatedField<T> {
    initial: T,
    raw: T,
    rules: Vec<Box<dyn Validation<Value = T>>>,
}

impl<T: fmt::Debug> fmt::Debug for ValidatedField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedField")
            .field("raw", &self.raw)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<T: Clone> ValidatedField<T> {
    /// Create a field with no rules, starting at `initial`
    pub fn new(initial: T) -> Self {
        Self {
            raw: initial.clone(),
            initial,
            rules: Vec::new(),
        }
    }

    /// Append a rule to the end of the chain
    pub fn with_rule<V>(mut self, rule: V) -> Self
    where
        V: Validation<Value = T> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Replace the raw value. Never fails and never validates.
    pub fn set_raw(&mut self, value: T) {
        self.raw = value;
    }

    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// Mutable access for in-place editing (e.g. a text input binding)
    pub fn raw_mut(&mut self) -> &mut T {
        &mut self.raw
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Raw value passed through every rule's sanitizer, in order
    pub fn sanitized_value(&self) -> T {
        self.rules
            .iter()
            .fold(self.raw.clone(), |value, rule| rule.sanitize(value))
    }

    /// True when every rule accepts the sanitized value
    pub fn is_valid(&self) -> bool {
        let sanitized = self.sanitized_value();
        self.rules.iter().all(|rule| rule.validate(&sanitized))
    }

    /// Hand out the sanitized value and clear the buffer, or report [`Invalid`]
    ///
    /// A rejected commit leaves the field exactly as it was. Reacting to the
    /// rejection (a retry cue, an error message) is up to the caller.
    pub fn commit_if_valid(&mut self) -> Result<T, Invalid> {
        let sanitized = self.sanitized_value();
        if !self.rules.iter().all(|rule| rule.validate(&sanitized)) {
            debug!(rules = self.rules.len(), "Rejected commit");
            return Err(Invalid);
        }

        self.reset();
        Ok(sanitized)
    }

    /// Restore the value the field was created with
    pub fn reset(&mut self) {
        self.raw = self.initial.clone();
    }
}
