use crate::error::Result;

/// Terminal interaction used by the key provider and the settings editor.
pub trait Prompter {
    /// Print a line of text.
    fn say(&self, message: &str);

    /// Ask for a line of free text. An empty answer is returned as `""`.
    fn ask(&self, message: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Open a page in the user's browser.
    fn open_url(&self, url: &str) -> Result<()>;
}
