//! Parameter descriptions: identity, flags, arity, default, validator, and
//! display hint for one named value. Immutable after construction except for
//! the current validated value, which a front end overwrites after a
//! successful validation pass.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::parameter::{FlagRegistry, ParamValue, Validator};

/// How many raw values a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// No value; the parameter is a boolean flag.
    Flag,
    /// Exactly one value.
    One,
    /// Zero or one value.
    Optional,
    /// Zero or more values.
    ZeroOrMore,
    /// One or more values.
    OneOrMore,
}

impl Arity {
    /// Whether more than one value may be collected.
    pub fn is_multi(self) -> bool {
        matches!(self, Arity::ZeroOrMore | Arity::OneOrMore)
    }

    /// Whether the parameter consumes raw values at all.
    pub fn takes_value(self) -> bool {
        !matches!(self, Arity::Flag)
    }
}

/// Display-intent tag guiding which input control the form surface renders.
/// Has no effect on the command-line surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetHint {
    Directory,
    File,
    FileOrDirectory,
    Text,
    Password,
    Checkbox,
}

/// Description of one named value, shared by both interface surfaces.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    name: String,
    short: Option<char>,
    long: Option<String>,
    meta: Option<String>,
    arity: Arity,
    default: ParamValue,
    value: ParamValue,
    validator: Validator,
    help: Option<String>,
    widget: WidgetHint,
}

impl ParameterSpec {
    pub fn builder(name: impl Into<String>) -> ParameterSpecBuilder {
        ParameterSpecBuilder {
            name: name.into(),
            short: None,
            long: None,
            meta: None,
            arity: Arity::One,
            default: ParamValue::None,
            validator: Validator::accept_any(),
            help: None,
            widget: None,
        }
    }

    /// Identifier: callback key and fallback positional token.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Display name for help text, when one applies.
    pub fn meta(&self) -> Option<&str> {
        self.meta.as_deref()
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn default(&self) -> &ParamValue {
        &self.default
    }

    /// Current validated value; starts equal to the default.
    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn widget(&self) -> WidgetHint {
        self.widget
    }

    /// Whether the parameter is addressed by flags rather than positionally.
    pub fn is_flagged(&self) -> bool {
        self.short.is_some() || self.long.is_some()
    }

    pub(crate) fn set_value(&mut self, value: ParamValue) {
        self.value = value;
    }
}

/// Builder for [`ParameterSpec`]. Construction claims short/long flags in the
/// given [`FlagRegistry`] and fails eagerly on a collision.
pub struct ParameterSpecBuilder {
    name: String,
    short: Option<char>,
    long: Option<String>,
    meta: Option<String>,
    arity: Arity,
    default: ParamValue,
    validator: Validator,
    help: Option<String>,
    widget: Option<WidgetHint>,
}

impl ParameterSpecBuilder {
    /// Single-dash flag, as in `-e`.
    pub fn short(mut self, flag: char) -> Self {
        self.short = Some(flag);
        self
    }

    /// Double-dash flag, as in `--example`.
    pub fn long(mut self, flag: impl Into<String>) -> Self {
        self.long = Some(flag.into());
        self
    }

    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    pub fn default(mut self, default: impl Into<ParamValue>) -> Self {
        self.default = default.into();
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn widget(mut self, widget: WidgetHint) -> Self {
        self.widget = Some(widget);
        self
    }

    pub fn build(self, registry: &mut FlagRegistry) -> Result<ParameterSpec, ConfigError> {
        // A positional token cannot carry a presence/absence action.
        if self.arity == Arity::Flag && self.short.is_none() && self.long.is_none() {
            return Err(ConfigError::UnflaggedFlagParameter(self.name));
        }
        if let Some(flag) = self.short {
            registry.claim_short(flag, &self.name)?;
        }
        if let Some(ref flag) = self.long {
            registry.claim_long(flag, &self.name)?;
        }

        // A long flag equal to the name needs no separate display name.
        let meta = if self.long.as_deref() == Some(self.name.as_str()) {
            None
        } else {
            self.meta.or_else(|| Some(self.name.clone()))
        };

        // Zero-arity parameters always render as a checkbox.
        let widget = if self.arity == Arity::Flag {
            WidgetHint::Checkbox
        } else {
            self.widget.unwrap_or(WidgetHint::Text)
        };

        Ok(ParameterSpec {
            value: self.default.clone(),
            name: self.name,
            short: self.short,
            long: self.long,
            meta,
            arity: self.arity,
            default: self.default,
            validator: self.validator,
            help: self.help,
            widget,
        })
    }
}
