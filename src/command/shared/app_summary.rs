use crate::actor::{DetailedApplicationSummary, ProcessSummary};
use crate::ui::Ui;
use chrono::{Duration, Utc};

/// Renders an application's detailed summary: app facts, then one block per process.
pub struct AppSummaryDisplayer<'a> {
    ui: &'a dyn Ui,
}

impl<'a> AppSummaryDisplayer<'a> {
    pub fn new(ui: &'a dyn Ui) -> Self {
        Self { ui }
    }

    pub fn display(&self, summary: &DetailedApplicationSummary) {
        let routes = summary
            .routes
            .iter()
            .map(|route| route.url())
            .collect::<Vec<_>>()
            .join(", ");
        let mut rows = vec![
            ("name:".to_string(), summary.application.name.clone()),
            (
                "requested state:".to_string(),
                summary.application.state.to_string(),
            ),
            ("routes:".to_string(), routes),
            (
                "last uploaded:".to_string(),
                summary
                    .last_uploaded
                    .map(|t| self.ui.user_friendly_date(t))
                    .unwrap_or_default(),
            ),
        ];
        if let Some(droplet) = &summary.current_droplet {
            rows.push(("stack:".to_string(), droplet.stack.clone()));
            rows.push(("buildpacks:".to_string(), droplet.buildpacks.join(", ")));
        }
        self.ui.display_key_value_table("", &rows, 3);
        self.display_processes(&summary.process_summaries);
    }

    /// One block per process, each preceded by a blank line.
    pub fn display_processes(&self, processes: &[ProcessSummary]) {
        for process in processes {
            self.ui.display_newline();
            self.display_process(process);
        }
    }

    fn display_process(&self, process: &ProcessSummary) {
        let rows = vec![
            ("type:".to_string(), process.process_type.clone()),
            (
                "instances:".to_string(),
                format!("{}/{}", process.running_instances(), process.instances.len()),
            ),
            ("memory usage:".to_string(), format!("{}M", process.memory_in_mb)),
        ];
        self.ui.display_key_value_table("", &rows, 3);

        if process.instances.is_empty() {
            self.ui.display_newline();
            self.ui.display_text("There are no running instances of this process.");
            return;
        }

        let mut table = vec![vec![
            String::new(),
            "state".to_string(),
            "since".to_string(),
            "cpu".to_string(),
            "memory".to_string(),
            "disk".to_string(),
        ]];
        let now = Utc::now();
        for instance in &process.instances {
            let since = now - Duration::seconds(instance.uptime_seconds as i64);
            table.push(vec![
                format!("#{}", instance.index),
                instance.state.clone(),
                self.ui.user_friendly_date(since),
                format!("{:.1}%", instance.cpu * 100.0),
                format!(
                    "{} of {}",
                    human_bytes(instance.memory_usage),
                    human_bytes(instance.memory_quota)
                ),
                format!(
                    "{} of {}",
                    human_bytes(instance.disk_usage),
                    human_bytes(instance.disk_quota)
                ),
            ]);
        }
        self.ui.display_table("", &table, 3);
    }
}

/// Bytes in the largest whole unit: `0`, `512K`, `32M`, `1G`.
pub(crate) fn human_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    match bytes {
        0 => "0".to_string(),
        b if b >= GB && b % GB == 0 => format!("{}G", b / GB),
        b if b >= MB => format!("{:.1}M", b as f64 / MB as f64),
        b if b >= KB => format!("{}K", b / KB),
        b => format!("{}B", b),
    }
}
