use crate::{
    config::{self, Settings},
    errors::{FileOperation, IoError},
    input::{self, InputSource},
    materialize::{self, DiskFileSystem},
    parser::{self, Format},
    preview, prompt,
    tree::EntryCounts,
};
use colored::Colorize;
use std::{borrow::Cow, path::PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SproutError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] input::InputError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] materialize::MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// What the operator asked for on the command line. Unset values come from the settings
/// file, then from prompts when a terminal is attached, then from built-in defaults.
#[derive(Debug, Clone)]
pub struct Options {
    pub input: InputSource,
    pub format: Option<Format>,
    pub name: Option<String>,
    pub force: bool,
    pub keep_root_label: bool,
    pub config: Option<PathBuf>,
}

/// Totals reported once the structure has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Absolute path of the created root folder.
    pub root: PathBuf,
    pub counts: EntryCounts,
}

/// How a run ended when no error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(Summary),
    /// The input held nothing but whitespace.
    EmptyInput,
    /// The input had text but no line produced an entry.
    EmptyStructure,
    /// The target already existed and replacing it was not approved.
    Cancelled,
}

/// Reads a structure, shows what was parsed, and writes it below the target folder in the
/// current working directory.
///
/// # Errors
///
/// Returns a [`SproutError`] if:
///
/// - The settings file cannot be read or parsed.
/// - The structure text cannot be read.
/// - A prompt fails.
/// - An existing target cannot be removed, or a directory or file cannot be created.
pub fn generate(options: Options) -> Result<Outcome, SproutError> {
    let settings = Settings::load(options.config.as_deref())?;
    let interactive = prompt::is_interactive();

    log::debug!("interactive: {}, settings: {:?}", interactive, settings);

    let format = match options.format.or(settings.format) {
        Some(format) => format,
        None if interactive => prompt::get_format()?,
        None => Format::default(),
    };

    if interactive && options.input == InputSource::Stdin {
        prompt::print_instructions(format);
    }

    let text = options.input.read()?;

    if text.trim().is_empty() {
        println!("{}", "No folder structure provided. Exiting.".red());
        return Ok(Outcome::EmptyInput);
    }

    let name = match options.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ if interactive => prompt::get_root_name(&settings.default_name)?,
        _ => settings.default_name.clone(),
    };

    let body = if options.keep_root_label || settings.keep_root_label {
        Cow::Borrowed(text.as_str())
    } else {
        match parser::split_root_label(&text) {
            Some(label) => {
                log::info!("dropping drawn root line: {}/", label.name);
                Cow::Owned(label.body)
            }
            None => Cow::Borrowed(text.as_str()),
        }
    };

    println!("\nParsing folder structure as {}...", format.as_str());

    let tree = format.parser().parse(&body);

    if tree.is_empty() {
        println!("{}", "Could not parse any valid folder structure.".red());
        return Ok(Outcome::EmptyStructure);
    }

    preview::preview_as_tree(&tree, &name);

    let target = PathBuf::from(&name);

    if target.exists() {
        println!(
            "{}",
            format!("Folder '{}' already exists.", target.display()).yellow()
        );

        let approved = if options.force {
            true
        } else if interactive {
            prompt::confirm_overwrite()?
        } else {
            log::warn!("not replacing '{}' without --force", target.display());
            false
        };

        if !approved {
            println!("{}", "Operation cancelled.".red());
            return Ok(Outcome::Cancelled);
        }

        materialize::remove_existing(&target)?;
    }

    println!("\nCreating folder structure in '{}'...", name);

    materialize::materialize(&mut DiskFileSystem, &target, tree)?;

    let counts = materialize::count_entries(&target)?;
    let root = target
        .canonicalize()
        .map_err(|error| IoError::new(FileOperation::Read, target.clone(), error))?;

    println!(
        "\n{} Successfully created folder structure in '{}'!",
        "✔".green(),
        name
    );
    println!("Summary:");
    println!("   Location: {}", root.display());
    println!("   Folders created: {}", counts.directories);
    println!("   Files created: {}", counts.files);

    Ok(Outcome::Created(Summary { root, counts }))
}
