use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    Command,
};
use sprout::{
    api::{self, Options},
    input::InputSource,
    parser::Format,
};
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read the structure from a file instead of standard input")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("How the structure is written; asked for when omitted")
                .value_parser(["tree", "paths"]),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .help("Name of the folder to create the structure in"),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .help("Replace an existing folder without asking")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-root-label")
                .long("keep-root-label")
                .help("Create the first line of a tree drawing instead of treating it as the drawn root")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML settings file")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    let format = matches
        .get_one::<String>("format")
        .map(|value| value.parse::<Format>())
        .transpose()?;

    let input = match matches.get_one::<PathBuf>("input") {
        Some(path) => InputSource::File(path.clone()),
        None => InputSource::Stdin,
    };

    let options = Options {
        input,
        format,
        name: matches.get_one::<String>("name").cloned(),
        force: matches.get_flag("force"),
        keep_root_label: matches.get_flag("keep-root-label"),
        config: matches.get_one::<PathBuf>("config").cloned(),
    };

    let outcome = api::generate(options)?;

    log::debug!("finished with: {:?}", outcome);

    Ok(())
}

fn init_logger(is_verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if is_verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}
