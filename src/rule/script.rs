//! Embedded ECMAScript rule backend.
//!
//! The script body is evaluated once in a fresh interpreter context at
//! load time; after evaluation a top-level binding named after the rule
//! function must resolve to a callable of signature
//! `(path, idx, text) -> boolean`. The context lives as long as the owning
//! rule, and boa requires `&mut Context` for every call, hence the
//! `RefCell`.

use std::cell::RefCell;

use boa_engine::{Context, JsObject, JsString, JsValue, Source};

use crate::config::RawFn;
use crate::error::{PolylintError, Result};

pub struct ScriptRule {
    name: String,
    context: RefCell<Context>,
    function: JsObject,
}

impl ScriptRule {
    /// Evaluate the script body and resolve the named callable.
    ///
    /// # Errors
    /// Returns an error if the body fails to evaluate or the binding is
    /// missing or not callable.
    pub fn compile(raw: &RawFn) -> Result<Self> {
        let mut context = Context::default();
        context
            .eval(Source::from_bytes(raw.body.as_bytes()))
            .map_err(|e| PolylintError::Script {
                name: raw.name.clone(),
                reason: e.to_string(),
            })?;

        let global = context.global_object();
        let binding = global
            .get(JsString::from(raw.name.as_str()), &mut context)
            .map_err(|e| PolylintError::Script {
                name: raw.name.clone(),
                reason: e.to_string(),
            })?;

        if !binding.is_callable() {
            return Err(PolylintError::Script {
                name: raw.name.clone(),
                reason: "top-level binding is missing or not a function".to_string(),
            });
        }
        let function = binding
            .as_object()
            .cloned()
            .ok_or_else(|| PolylintError::Script {
                name: raw.name.clone(),
                reason: "top-level binding is missing or not a function".to_string(),
            })?;

        Ok(Self {
            name: raw.name.clone(),
            context: RefCell::new(context),
            function,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the callable; the result is converted with ECMAScript
    /// truthiness.
    ///
    /// # Errors
    /// Returns an error if the script throws.
    #[allow(clippy::cast_possible_truncation)]
    pub fn eval(&self, path: &str, idx: i64, text: &str) -> Result<bool> {
        let mut context = self.context.borrow_mut();
        let args = [
            JsValue::from(JsString::from(path)),
            JsValue::from(idx as i32),
            JsValue::from(JsString::from(text)),
        ];

        let value = self
            .function
            .call(&JsValue::undefined(), &args, &mut context)
            .map_err(|e| PolylintError::PredicateRuntime {
                name: self.name.clone(),
                reason: e.to_string(),
            })?;

        Ok(value.to_boolean())
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
