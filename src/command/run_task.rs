use super::flag::parse_megabytes;
use super::BaseCommand;
use crate::actor::Task;
use crate::error::CommandError;
use tracing::debug;

/// Process type a task inherits from when neither a command nor a process is given.
const DEFAULT_TASK_PROCESS: &str = "task";

#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunTaskArgs {
    /// Application name
    pub app: String,
    /// The command to execute
    pub command: Option<String>,
    /// Name to give the task (generated if omitted)
    #[arg(long)]
    pub name: Option<String>,
    /// Memory limit (e.g. 256M, 1024M, 1G)
    #[arg(short = 'm', value_parser = parse_megabytes)]
    pub memory: Option<u64>,
    /// Disk limit (e.g. 256M, 1024M, 1G)
    #[arg(short = 'k', value_parser = parse_megabytes)]
    pub disk: Option<u64>,
    /// Process type to use as a template for command, memory, and disk
    #[arg(long)]
    pub process: Option<String>,
}

impl RunTaskArgs {
    /// The process to copy settings from, if any.
    fn template_process(&self) -> Option<&str> {
        let process = self.process.as_deref().filter(|p| !p.is_empty());
        let command = self.command.as_deref().filter(|c| !c.is_empty());
        match (process, command) {
            (Some(process), _) => Some(process),
            (None, None) => Some(DEFAULT_TASK_PROCESS),
            (None, Some(_)) => None,
        }
    }
}

pub struct RunTaskCommand {
    base: BaseCommand,
}

impl RunTaskCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &RunTaskArgs) -> Result<(), CommandError> {
        self.base.check_target(true, true)?;
        let user = self.base.current_user()?;
        let space = self.base.targeted_space();
        let org = self.base.targeted_organization();
        let actor = &self.base.actor;

        let app = self.base.show_warnings(
            actor
                .get_application_by_name_and_space(&args.app, &space.guid)
                .await,
        )?;

        self.base.ui.display_text_with_flavor(
            "Creating task for app {AppName} in org {OrgName} / space {SpaceName} as {CurrentUser}...",
            &[
                ("AppName", args.app.as_str()),
                ("OrgName", org.name.as_str()),
                ("SpaceName", space.name.as_str()),
                ("CurrentUser", user.name.as_str()),
            ],
        );

        let template_process_guid = match args.template_process() {
            Some(process_type) => {
                let process = self.base.show_warnings(
                    actor
                        .get_process_by_type_and_application(process_type, &app.guid)
                        .await,
                )?;
                Some(process.guid)
            }
            None => None,
        };

        let task = Task {
            name: args.name.clone().unwrap_or_default(),
            command: args.command.clone().unwrap_or_default(),
            memory_in_mb: args.memory,
            disk_in_mb: args.disk,
            template_process_guid,
            ..Default::default()
        };
        debug!(app = %app.name, ?task, "running task");
        let task = self.base.show_warnings(actor.run_task(&app.guid, &task).await)?;

        self.base.ui.display_ok();
        self.base.ui.display_newline();
        self.base
            .ui
            .display_text("Task has been submitted successfully for execution.");
        self.base.ui.display_key_value_table(
            "",
            &[
                ("task name:".to_string(), task.name),
                ("task id:".to_string(), task.sequence_id.to_string()),
            ],
            3,
        );
        Ok(())
    }
}
