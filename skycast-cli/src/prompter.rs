use inquire::{Confirm, InquireError, Text};
use skycast_core::{Error, Prompter, Result};

/// Prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct InquirePrompter;

impl InquirePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for InquirePrompter {
    fn say(&self, message: &str) {
        println!("{message}");
    }

    fn ask(&self, message: &str) -> Result<String> {
        Text::new(message).prompt().map_err(prompt_error)
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        Confirm::new(message)
            .with_default(false)
            .prompt()
            .map_err(prompt_error)
    }

    fn open_url(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|err| Error::Prompt(format!("failed to open {url}: {err}")))
    }
}

fn prompt_error(err: InquireError) -> Error {
    Error::Prompt(err.to_string())
}
