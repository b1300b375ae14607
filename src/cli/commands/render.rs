//! Render command implementation.
//!
//! `graphgist render [FILE]` rewrites marker comments in a document read
//! from a file or stdin.

use std::fs;
use std::io::Read;

use crate::cli::args::RenderArgs;
use crate::error::Result;
use crate::render::post_process;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The render command implementation.
pub struct RenderCommand {
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(args: RenderArgs) -> Self {
        Self { args }
    }

    fn read_input(&self) -> Result<String> {
        match &self.args.file {
            Some(path) => Ok(fs::read_to_string(path)?),
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let text = self.read_input()?;
        ui.output(&post_process(&text));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GistError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn renders_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.adoc");
        fs::write(&path, "= Title\n//graph\ntext\n").unwrap();

        let cmd = RenderCommand::new(RenderArgs { file: Some(path) });
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let out = &ui.outputs()[0];
        assert!(out.contains(r#"<h5 class="graph-visualization">"#));
        assert!(out.starts_with("= Title\n++++\n"));
        assert!(out.ends_with("++++\n\ntext\n"));
    }

    #[test]
    fn document_without_markers_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plain.adoc");
        fs::write(&path, "no markers // here\n").unwrap();

        let cmd = RenderCommand::new(RenderArgs { file: Some(path) });
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.outputs(), &["no markers // here\n".to_string()]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let cmd = RenderCommand::new(RenderArgs {
            file: Some(temp.path().join("missing.adoc")),
        });
        let mut ui = MockUI::new();

        assert!(matches!(cmd.execute(&mut ui).unwrap_err(), GistError::Io(_)));
    }
}
