//! Form actions: mutate the store, then redirect or report invalid input.

use store::{Remark, RemarkPatch, Store};

use crate::failure::RouteFailure;
use crate::paths;
use crate::validation::{FormErrors, RemarkEditorForm};

/// Result of a form submission that did not fail outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Continue at this location.
    Redirect(String),
    /// Show the form again with the submitted values and the errors.
    Invalid {
        submission: RemarkEditorForm,
        errors: FormErrors,
    },
}

/// Delete a remark, returning its owner's list as the place to continue at.
pub fn delete_remark<S: Store>(
    store: &S,
    user_id: &str,
    remark_id: &str,
) -> Result<String, RouteFailure> {
    store.delete::<Remark>(remark_id)?;
    tracing::info!(user_id, remark_id, "remark deleted");
    Ok(paths::remarks(user_id))
}

/// Validate the editor form and save it onto the remark.
pub fn save_remark<S: Store>(
    store: &S,
    user_id: &str,
    remark_id: &str,
    form: RemarkEditorForm,
) -> Result<ActionOutcome, RouteFailure> {
    if let Err(errors) = form.check() {
        tracing::debug!(remark_id, ?errors, "remark editor rejected");
        return Ok(ActionOutcome::Invalid {
            submission: form,
            errors,
        });
    }

    let RemarkEditorForm { title, content } = form;
    store.update::<Remark>(
        remark_id,
        RemarkPatch {
            title: Some(title),
            content: Some(content),
        },
    )?;
    tracing::info!(user_id, remark_id, "remark updated");
    Ok(ActionOutcome::Redirect(paths::remark(user_id, remark_id)))
}
