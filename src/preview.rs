use crate::tree::{Node, Tree};
use colored::Colorize;

/// How each part of a rendered line is decorated.
struct Style {
    connector: fn(&str) -> String,
    directory: fn(&str) -> String,
    file: fn(&str) -> String,
}

#[cfg(test)]
const PLAIN: Style = Style {
    connector: str::to_string,
    directory: str::to_string,
    file: str::to_string,
};

const COLORED: Style = Style {
    connector: |s| s.yellow().to_string(),
    directory: |s| s.blue().to_string(),
    file: |s| s.green().to_string(),
};

fn write_tree(out: &mut String, tree: &Tree, prefix: &str, style: &Style) {
    let len = tree.len();

    for (i, (name, node)) in tree.iter().enumerate() {
        let is_last = i == len - 1;

        let connector = if is_last { "└── " } else { "├── " };
        let label = match node {
            Node::Directory(_) => (style.directory)(&format!("{}/", name)),
            Node::File(_) => (style.file)(name),
        };

        out.push_str(&format!(
            "{}{}{}\n",
            (style.connector)(prefix),
            (style.connector)(connector),
            label
        ));

        if let Node::Directory(children) = node {
            let child_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };

            write_tree(out, children, &child_prefix, style);
        }
    }
}

fn render_with(tree: &Tree, root_name: &str, style: &Style) -> String {
    let mut out = format!("{}\n", (style.directory)(&format!("{}/", root_name)));

    write_tree(&mut out, tree, "", style);

    let counts = tree.counts();
    out.push_str(&format!(
        "\n{} directories, {} files\n",
        counts.directories, counts.files
    ));

    out
}

/// Renders `tree` below `root_name` without colors.
#[cfg(test)]
fn render(tree: &Tree, root_name: &str) -> String {
    render_with(tree, root_name, &PLAIN)
}

pub fn preview_as_tree(tree: &Tree, root_name: &str) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Parsed structure".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render_with(tree, root_name, &COLORED));

    println!("{}", "─".repeat(50).bright_blue());
}
