use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::notify::NotifyMode;

#[derive(Parser, Debug)]
#[command(name = "clipcopy")]
#[command(about = "Copy a section of a Markdown document to the clipboard by its id", long_about = None)]
pub struct Cli {
    /// Markdown document to read (defaults to the configured document)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// How to confirm a successful copy
    #[arg(short, long, global = true, value_enum)]
    pub notify: Option<NotifyMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the text of the element with this id
    Copy { id: String },
    /// Print the text that would be copied
    Show { id: String },
    /// List addressable element ids
    List {
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_copy() {
        let cli = Cli::parse_from(["clipcopy", "--file", "notes.md", "copy", "note"]);

        assert_eq!(cli.file, Some(PathBuf::from("notes.md")));
        assert!(matches!(cli.command, Commands::Copy { ref id } if id == "note"));
    }

    #[test]
    fn test_parse_notify_override() {
        let cli = Cli::parse_from(["clipcopy", "copy", "note", "--notify", "stderr"]);
        assert_eq!(cli.notify, Some(NotifyMode::Stderr));
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::parse_from(["clipcopy", "list", "--json"]);
        assert!(matches!(cli.command, Commands::List { json: true }));
    }
}
