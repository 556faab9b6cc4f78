//! Submission validation: one pass over the active mode's specs against the
//! raw widget state. Either every field validates and the pass yields the
//! full value map, or the failing fields are reported and the submission is
//! blocked; all other fields' state stays intact.

use indexmap::IndexMap;

use crate::form::placeholder::guidance;
use crate::parameter::{ParamValue, ParameterSpec};

/// Raw state of one rendered input control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    Text(String),
    Toggle(bool),
}

/// A validator failure attributed to one field, carrying the validator's
/// original message for display next to the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub name: String,
    pub message: String,
}

/// Validate one submission attempt. Fields are matched to specs in order.
///
/// Checkbox toggles are taken as the value directly. For every other widget
/// the raw text runs through the validator first; text still equal to the
/// widget kind's guidance then falls back to the declared default, so a
/// validator that rejects the guidance itself blocks the submission.
pub fn validate_submission(
    specs: &[ParameterSpec],
    fields: &[RawField],
) -> Result<IndexMap<String, ParamValue>, Vec<FieldError>> {
    let mut values = IndexMap::new();
    let mut errors = Vec::new();

    for (spec, field) in specs.iter().zip(fields) {
        match field {
            RawField::Toggle(on) => {
                values.insert(spec.name().to_string(), ParamValue::Bool(*on));
            }
            RawField::Text(raw) => {
                match spec.validator().run_for_arity(spec.arity(), raw) {
                    Ok(validated) => {
                        let value = if raw == guidance(spec.widget()) {
                            spec.default().clone()
                        } else {
                            validated
                        };
                        values.insert(spec.name().to_string(), value);
                    }
                    Err(message) => errors.push(FieldError {
                        name: spec.name().to_string(),
                        message,
                    }),
                }
            }
        }
    }

    if let Some(spec) = specs.get(fields.len()) {
        errors.push(FieldError {
            name: spec.name().to_string(),
            message: "no input control submitted for this parameter".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}
