//! storyshape CLI - story document schema checker

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use storyshape::{
    to_json, ConformOptions, Conformed, Conformer, ElementKind, JsonFormat, MetaField, Shape,
    Story, ThirdsMode,
};

#[derive(Parser)]
#[command(name = "storyshape")]
#[command(version)]
#[command(about = "Check story documents against the storyshape schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a JSON file against a schema shape
    Check {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Shape to check against (detected from the input by default)
        #[arg(long, value_enum, default_value = "auto")]
        shape: ShapeArg,

        /// Reject undeclared fields on thirds layers
        #[arg(long, env = "STORYSHAPE_EXACT_THIRDS")]
        exact_thirds: bool,
    },

    /// Show story information
    Info {
        /// Input story JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Re-emit a checked document as normalized JSON
    Fmt {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    /// Detect from the input
    Auto,
    Story,
    Page,
    Layer,
    Element,
    Media,
    Styles,
}

impl ShapeArg {
    fn shape(self) -> Option<Shape> {
        match self {
            ShapeArg::Auto => None,
            ShapeArg::Story => Some(Shape::Story),
            ShapeArg::Page => Some(Shape::Page),
            ShapeArg::Layer => Some(Shape::Layer),
            ShapeArg::Element => Some(Shape::Element),
            ShapeArg::Media => Some(Shape::Media),
            ShapeArg::Styles => Some(Shape::Styles),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            input,
            shape,
            exact_thirds,
        } => cmd_check(&input, shape, exact_thirds),
        Commands::Info { input } => cmd_info(&input),
        Commands::Fmt {
            input,
            output,
            compact,
        } => cmd_fmt(&input, output.as_deref(), compact),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn check_file(
    input: &Path,
    shape: ShapeArg,
    options: ConformOptions,
) -> Result<Conformed, storyshape::Error> {
    let conformer = Conformer::open_with_options(input, options)?;
    match shape.shape() {
        Some(shape) => conformer.check_as(shape),
        None => conformer.check_detected(),
    }
}

fn cmd_check(
    input: &Path,
    shape: ShapeArg,
    exact_thirds: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if exact_thirds {
        ThirdsMode::Exact
    } else {
        ThirdsMode::Open
    };
    let options = ConformOptions::new().with_thirds_mode(mode);
    let conformed = check_file(input, shape, options)?;

    println!(
        "{} {} conforms to {}",
        "✓".green().bold(),
        input.display(),
        conformed.shape().to_string().cyan()
    );

    if let Conformed::Story(ref story) = conformed {
        for extras in story.thirds_extras() {
            println!(
                "  {} page \"{}\", layer {}: thirds layer has undeclared fields ({})",
                "note".yellow(),
                extras.page,
                extras.layer,
                extras.fields.join(", ")
            );
        }
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let story: Story = Conformer::open(input)?.check_story()?;

    println!("{}", "Story Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = story.title {
        println!("{}: {}", "Title".bold(), title);
    }
    match story.meta {
        Some(MetaField::Shorthand(ref meta)) => println!("{}: {}", "Meta".bold(), meta),
        Some(MetaField::Full(ref meta)) => {
            if let Some(ref author) = meta.author {
                println!("{}: {}", "Author".bold(), author);
            }
            if let Some(ref publisher) = meta.publisher {
                println!("{}: {}", "Publisher".bold(), publisher.name);
            }
            if let Some(published) = meta.published_at() {
                println!("{}: {}", "Published".bold(), published);
            }
        }
        None => {}
    }
    if let Some(ref url) = story.canonical_url {
        println!("{}: {}", "Canonical URL".bold(), url);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let layers: usize = story.pages().iter().map(|p| p.layer_count()).sum();
    println!("{}: {}", "Pages".bold(), story.page_count());
    println!("{}: {}", "Layers".bold(), layers);
    println!("{}: {}", "Elements".bold(), story.element_count());
    println!(
        "{}: {}",
        "Analytics blocks".bold(),
        story.analytics.as_ref().map_or(0, Vec::len)
    );

    if let Some(ref defaults) = story.default_styles {
        let kinds: Vec<&str> = defaults.keys().map(ElementKind::as_str).collect();
        println!("{}: {}", "Default styles".bold(), kinds.join(", "));
    }

    Ok(())
}

fn cmd_fmt(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let conformed = check_file(input, ShapeArg::Auto, ConformOptions::default())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&conformed, format)?;

    if let Some(output_path) = output {
        fs::write(output_path, &json)?;
        log::info!("Wrote {}", output_path.display());
        println!("{} Wrote {}", "✓".green().bold(), output_path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}
