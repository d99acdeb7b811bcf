// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Project setup checks

use super::display_value;
use crate::{CheckError, EvaluationContext, Result};

/// Load the model at `file` and make it active
pub fn load_model(ctx: &mut EvaluationContext, file: &str) -> Result<()> {
    ctx.load(file).map(|_| ())
}

/// The active model uses `expected` as its schema
pub fn schema(ctx: &EvaluationContext, expected: &str) -> Result<()> {
    let actual = ctx.access().schema_identifier()?;
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::mismatch(format!(
            "We expected a schema of {} but instead got {}",
            expected, actual
        )))
    }
}

/// Attribute `attribute` of the project reads `expected`
pub fn project_attribute(ctx: &EvaluationContext, attribute: &str, expected: &str) -> Result<()> {
    let access = ctx.access();
    let project = access.project()?;
    let value = access.require_attribute(&project, attribute)?;
    if value.to_text().as_deref() == Some(expected) {
        Ok(())
    } else {
        Err(CheckError::mismatch(format!(
            "We expected a value of \"{}\" but instead got \"{}\"",
            expected,
            display_value(Some(value))
        )))
    }
}

/// A project representation context has the described sub-context
pub fn sub_context(
    ctx: &EvaluationContext,
    identifier: &str,
    context_type: &str,
    target_view: &str,
) -> Result<()> {
    match ctx.access().sub_context(identifier, context_type, target_view)? {
        Some(_) => Ok(()),
        None => Err(CheckError::absent(format!(
            "The subcontext with identifier {}, type {}, and target view {} could not be found",
            identifier, context_type, target_view
        ))),
    }
}
