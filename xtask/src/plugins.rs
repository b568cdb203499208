use crate::config::XtaskConfig;
use crate::utils::TaskResult;
use crate::Task;

pub mod check;
pub mod header;
pub mod list;
pub mod show;

pub trait TaskPlugin {
    fn description() -> &'static str
    where
        Self: Sized;
    fn execute(&self) -> TaskResult<()>;
}

/// Builds the plugin for a parsed task.
pub fn fetch_task(task: Task, config: XtaskConfig) -> TaskResult<Box<dyn TaskPlugin>> {
    Ok(match task {
        Task::Check { boards, all } => Box::new(check::CheckTask::new(boards, all, config)?),
        Task::Show { board, toml } => Box::new(show::ShowTask::new(board, toml, config)?),
        Task::Header { board, out } => Box::new(header::HeaderTask::new(board, out, config)?),
        Task::List => Box::new(list::ListTask::new(config)),
    })
}

/// Tasks and their descriptions, for the help text.
pub fn list_tasks() -> Vec<(&'static str, &'static str)> {
    vec![
        ("check", check::CheckTask::description()),
        ("show", show::ShowTask::description()),
        ("header", header::HeaderTask::description()),
        ("list", list::ListTask::description()),
    ]
}
