use std::path::PathBuf;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub unit_count: usize,
    pub file_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    /// Whether the command did what was asked.
    pub fn is_success(&self) -> bool {
        match &self.summary {
            CommandSummary::Extract(_) => true,
            CommandSummary::Init(init) => init.created,
        }
    }
}
