//! CLI 模块

pub mod tasks;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::model::{TaskFilter, TaskId, ThemePreference};

#[derive(Parser)]
#[command(name = "todolist")]
#[command(version)]
#[command(about = "A terminal task list with light/dark themes")]
pub struct Cli {
    /// Base directory for config, storage and log (default: ~/.todolist)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive terminal UI (default)
    Tui,
    /// Add a task
    Add {
        /// Task text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Toggle a task between completed and pending
    Toggle {
        /// Task ID
        id: TaskId,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },
    /// List tasks
    List {
        /// Which tasks to show
        #[arg(short, long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change the theme
    Theme {
        /// New theme; omit to print the current one
        #[arg(value_enum)]
        value: Option<ThemeArg>,
    },
    /// Print resolved config, storage and log paths
    Path,
    /// Write a default config.toml if none exists
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Completed,
    Pending,
}

impl From<FilterArg> for TaskFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => TaskFilter::All,
            FilterArg::Completed => TaskFilter::Completed,
            FilterArg::Pending => TaskFilter::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

impl ThemeArg {
    /// 计算目标主题
    pub fn resolve(&self, current: ThemePreference) -> ThemePreference {
        match self {
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
            ThemeArg::Toggle => current.toggled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["todolist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_parse_add_joins_words() {
        let cli = Cli::try_parse_from(["todolist", "add", "buy", "milk"]).unwrap();
        match cli.command {
            Some(Commands::Add { text }) => assert_eq!(text, vec!["buy", "milk"]),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_list_filter_and_data_dir() {
        let cli = Cli::try_parse_from([
            "todolist",
            "list",
            "--filter",
            "pending",
            "--data-dir",
            "/tmp/x",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        match cli.command {
            Some(Commands::List { filter, json }) => {
                assert_eq!(TaskFilter::from(filter), TaskFilter::Pending);
                assert!(!json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_add_requires_text() {
        assert!(Cli::try_parse_from(["todolist", "add"]).is_err());
    }

    #[test]
    fn test_theme_arg_resolve() {
        assert_eq!(
            ThemeArg::Toggle.resolve(ThemePreference::Light),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemeArg::Light.resolve(ThemePreference::Dark),
            ThemePreference::Light
        );
    }
}
