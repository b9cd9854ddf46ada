//! Completion scripts and the `gcd` shell function
//!
//! `gwm completions <shell>` prints the clap-generated completions for the
//! `gwm` binary, then a small `gcd` function that changes directory through
//! `gwm resolve` and completes targets through `gwm complete`.

use anyhow::{anyhow, Result};
use clap::Command;
use clap_complete::{generate, shells};
use std::io::{self, Write};
use std::str::FromStr;

/// Supported shell types for completion generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(anyhow!(
                "Unsupported shell: {s}. Supported shells: bash, zsh, fish"
            )),
        }
    }
}

const BASH_INTEGRATION: &str = r#"
gcd() {
    local target
    target="$(gwm resolve "$1")" && cd "$target"
}

_gcd() {
    local IFS=$'\n'
    COMPREPLY=($(gwm complete "${COMP_WORDS[COMP_CWORD]}" 2>/dev/null))
}
complete -F _gcd gcd
"#;

const ZSH_INTEGRATION: &str = r#"
gcd() {
    local target
    target="$(gwm resolve "$1")" && cd "$target"
}

_gcd() {
    local -a targets
    targets=("${(@f)$(gwm complete "$PREFIX" 2>/dev/null)}")
    compadd -a targets
}
compdef _gcd gcd
"#;

const FISH_INTEGRATION: &str = r#"
function gcd
    set -l target (gwm resolve $argv[1]); and cd $target
end

complete -c gcd -f -a '(gwm complete (commandline -ct) 2>/dev/null)'
"#;

/// The `gcd` function and its completion hook for `shell`
pub fn shell_integration(shell: Shell) -> &'static str {
    match shell {
        Shell::Bash => BASH_INTEGRATION,
        Shell::Zsh => ZSH_INTEGRATION,
        Shell::Fish => FISH_INTEGRATION,
    }
}

/// Write completions for `cmd` plus the shell integration to `out`
pub fn write_completions<W: Write>(cmd: &mut Command, shell: Shell, out: &mut W) -> Result<()> {
    let bin_name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name, out),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name, out),
        Shell::Fish => generate(shells::Fish, cmd, bin_name, out),
    }
    out.write_all(shell_integration(shell).as_bytes())?;
    Ok(())
}

/// Generate the completion script and write it to stdout
pub fn generate_completions(cmd: &mut Command, shell: Shell) -> Result<()> {
    write_completions(cmd, shell, &mut io::stdout().lock())
}
