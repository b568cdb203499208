use crate::config::XtaskConfig;
use crate::utils::{project_root, TaskResult};

pub struct ListTask {
    config: XtaskConfig,
}

impl ListTask {
    pub fn new(config: XtaskConfig) -> Self {
        ListTask { config }
    }
}

impl super::TaskPlugin for ListTask {
    fn description() -> &'static str {
        "List board files"
    }

    fn execute(&self) -> TaskResult<()> {
        for name in self.config.boards(&project_root())? {
            let marker = if name == self.config.boards.default { "*" } else { " " };
            println!("{} {}", marker, name);
        }
        Ok(())
    }
}
