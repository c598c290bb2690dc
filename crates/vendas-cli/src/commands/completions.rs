use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

const BIN_NAME: &str = "vendas";

pub fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    let script = render_completions(shell);

    match output_path {
        Some(path) => {
            std::fs::write(path, &script)?;
            tracing::info!(path = %path.display(), ?shell, "Wrote completion script");
            println!("{}", path.display());
        }
        None => io::stdout().write_all(&script)?,
    }
    Ok(())
}

/// Completion script for `shell`, as bytes ready to write
pub fn render_completions(shell: CompletionShell) -> Vec<u8> {
    let mut cli = Cli::command();
    let mut script = Vec::new();
    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut cli, BIN_NAME, &mut script),
        CompletionShell::Zsh => generate(shells::Zsh, &mut cli, BIN_NAME, &mut script),
        CompletionShell::Fish => generate(shells::Fish, &mut cli, BIN_NAME, &mut script),
    }
    script
}
