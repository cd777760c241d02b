use super::wait_for_result;
use crate::command::BaseCommand;
use crate::error::CommandError;
use tracing::debug;

/// Delete one service credential binding. Returns whether the unbind finished.
pub async fn delete_service_binding(
    base: &BaseCommand,
    binding_guid: &str,
    wait: bool,
) -> Result<bool, CommandError> {
    debug!(binding_guid, "deleting service binding");
    base.ui.display_text_with_flavor(
        "Deleting service binding {BindingGUID}...",
        &[("BindingGUID", binding_guid)],
    );
    let stream = base.show_warnings(base.actor.delete_service_app_binding(binding_guid).await)?;
    let complete = wait_for_result(stream, base.ui.as_ref(), wait).await?;
    base.ui.display_ok();
    Ok(complete)
}

pub fn display_unbinding_in_progress(base: &BaseCommand, service_instance_name: &str) {
    let binary_name = base.binary_name();
    base.ui.display_newline();
    base.ui.display_text_with_flavor(
        "Unbinding in progress. Use '{BinaryName} service {ServiceInstanceName}' to check operation status.",
        &[
            ("BinaryName", binary_name.as_str()),
            ("ServiceInstanceName", service_instance_name),
        ],
    );
}
