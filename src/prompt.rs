use crate::parser::Format;
use colored::Colorize;
use inquire::{Confirm, InquireError, Select, Text};
use miette::Diagnostic;
use std::io::{self, IsTerminal};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to prompt user")]
    #[diagnostic(
        code(sprout::prompt::inquire),
        help("Pass --format, --name and --force to run without prompts")
    )]
    Inquire(#[from] InquireError),
}

const EXAMPLE_TREE: &str = "project/
├── src/
│   ├── main.py
│   ├── utils/
│   │   ├── __init__.py
│   │   └── helpers.py
│   └── config/
├── tests/
│   └── test_main.py
├── docs/
│   └── README.md
└── requirements.txt";

const EXAMPLE_PATHS: &str = "project/src/main.py
project/src/utils/
project/README.md";

/// Prompts need a terminal on stdin; piped input runs with defaults instead.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Prints how to paste a structure, with a sample for the chosen format.
pub fn print_instructions(format: Format) {
    let rule = "─".repeat(50);

    println!("{}", rule.bright_blue());
    println!("{}", "Folder structure generator".bold().bright_blue());
    println!("{}", rule.bright_blue());

    let example = match format {
        Format::Tree => EXAMPLE_TREE,
        Format::Paths => EXAMPLE_PATHS,
    };

    println!("Paste your folder structure, for example:\n");
    for line in example.lines() {
        println!("  {}", line.yellow());
    }

    println!(
        "\n{} {}",
        "└─".bold().bright_blue(),
        "Press Enter twice when done".bright_green()
    );
}

pub fn get_format() -> Result<Format, PromptError> {
    let answer = Select::new("Choose input format:", Format::ALL.to_vec())
        .with_help_message("tree drawings nest by indentation, paths nest by slashes")
        .prompt()?;

    Ok(answer)
}

/// Asks for the target folder name, falling back to `default` on a blank answer.
pub fn get_root_name(default: &str) -> Result<String, PromptError> {
    let answer = Text::new("Main folder name:")
        .with_default(default)
        .prompt()?;

    let answer = answer.trim();

    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Asks whether an existing target folder may be removed. Escaping the prompt declines.
pub fn confirm_overwrite() -> Result<bool, PromptError> {
    match Confirm::new("Do you want to overwrite it?")
        .with_default(false)
        .prompt()
    {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled) => Ok(false),
        Err(error) => Err(error.into()),
    }
}
