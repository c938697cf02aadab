use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kbnav_dom::parse::parse_path;
use kbnav_dom::Element;
use kbnav_tabbable::{effective_tabindex, is_tabbable, tabbable, CheckOptions};
use markup5ever::local_name;

pub trait RunCommand {
    /// # Errors
    ///
    /// If any part of the lifecycle fails
    /// * Fails to read or parse any files
    /// * A requested element or document body does not exist
    fn run(&self) -> anyhow::Result<ExitCode>;
}

#[derive(Parser)]
#[clap(
    bin_name = "kbnav",
    name = "kbnav",
    author,
    version,
    about = "Inspect the keyboard tab order of HTML documents",
    long_about = None
)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the tab order of each document's body
    Order(Order),
    /// Check whether a single element is tabbable
    Check(Check),
}

#[derive(clap::Args)]
pub struct Order {
    /// The HTML files to inspect
    #[clap(value_parser, required = true)]
    pub paths: Vec<PathBuf>,
    /// Skip the rendered-box and visibility checks
    #[clap(long = "no-display-check")]
    pub no_display_check: bool,
}

impl RunCommand for Order {
    fn run(&self) -> anyhow::Result<ExitCode> {
        let options = CheckOptions {
            display_check: !self.no_display_check,
        };
        for path in &self.paths {
            let document = parse_path(path)?;
            let Some(body) = document.body() else {
                anyhow::bail!("{} has no body element", path.display());
            };
            if self.paths.len() > 1 {
                println!("{}:", path.display());
            }
            for (index, element) in tabbable(&body, &options).iter().enumerate() {
                println!("{}", describe(index, element));
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

#[derive(clap::Args)]
pub struct Check {
    /// The HTML file to inspect
    pub path: PathBuf,
    /// The id of the element to check
    pub id: String,
    /// Skip the rendered-box and visibility checks
    #[clap(long = "no-display-check")]
    pub no_display_check: bool,
}

impl RunCommand for Check {
    fn run(&self) -> anyhow::Result<ExitCode> {
        let options = CheckOptions {
            display_check: !self.no_display_check,
        };
        let document = parse_path(&self.path)?;
        let Some(element) = document.get_element_by_id(&self.id) else {
            anyhow::bail!("no element with id {:?} in {}", self.id, self.path.display());
        };
        if is_tabbable(&element, &options) {
            println!("#{} is tabbable", self.id);
            Ok(ExitCode::SUCCESS)
        } else {
            println!("#{} is not tabbable", self.id);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn describe(index: usize, element: &Element) -> String {
    let tag = element
        .local_name()
        .map_or_else(|| "#text".to_string(), |name| name.to_string());
    let mut line = match element.attr(&local_name!("id")) {
        Some(id) => format!("{index}: {tag}#{id}"),
        None => format!("{index}: {tag}"),
    };
    match effective_tabindex(element) {
        0 => {}
        explicit => line.push_str(&format!(" [tabindex={explicit}]")),
    }
    line
}
