//! vanban CLI - render Vietnamese administrative documents from JSON content

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use vanban::compose::{ComposeOptions, Composer, Variant};
use vanban::render::{self, JsonFormat, OutputFormat, RenderOptions, RenderStats};
use vanban::{RenderedDocument, Role};

#[derive(Parser)]
#[command(name = "vanban")]
#[command(version)]
#[command(about = "Render Vietnamese administrative documents and meeting records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one administrative document
    #[command(alias = "doc")]
    Document {
        /// Document content (JSON object)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render several documents, one after another
    Batch {
        /// Document contents (JSON array)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render the minutes of a meeting
    Minutes {
        /// Meeting content (JSON object)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render the notice of meeting conclusions
    Conclusion {
        /// Meeting content (JSON object)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render the internal report of a meeting
    Report {
        /// Meeting content (JSON object)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render the landscape overview of several meetings
    Aggregate {
        /// Meeting contents (JSON array)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the role of every line of a text file
    Classify {
        /// Plain-text body
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Output options shared by the rendering commands.
#[derive(Args)]
struct RenderArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "xml")]
    format: FormatArg,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Mark page breaks in text output
    #[arg(long)]
    page_marks: bool,

    /// Product name printed in report footers
    #[arg(long, env = "VANBAN_PRODUCT_NAME")]
    product_name: Option<String>,

    /// Stamp the export with the current time and this user name
    #[arg(long, value_name = "NAME")]
    exported_by: Option<String>,

    /// Print structure statistics to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Flat-OPC WordprocessingML (opens in Word)
    Xml,
    /// Render tree as JSON
    Json,
    /// Plain-text preview
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Xml => OutputFormat::WordXml,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

impl RenderArgs {
    fn compose_options(&self) -> ComposeOptions {
        let mut options = ComposeOptions::new();
        if let Some(ref name) = self.product_name {
            options = options.with_product_name(name.as_str());
        }
        if let Some(ref user) = self.exported_by {
            options = options.with_export_stamp(chrono::Local::now().naive_local(), user.as_str());
        }
        options
    }

    fn render_options(&self) -> RenderOptions {
        let json = if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        RenderOptions::new()
            .with_format(self.format.into())
            .with_json(json)
            .with_page_break_marks(self.page_marks)
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Document { input, render } => read(&input).and_then(|json| {
            let doc = vanban::document_from_json(&json)?;
            cmd_render(Variant::Single(&doc), &render)
        }),
        Commands::Batch { input, render } => read(&input).and_then(|json| {
            let docs = vanban::documents_from_json(&json)?;
            cmd_render(Variant::Batch(&docs), &render)
        }),
        Commands::Minutes { input, render } => read(&input).and_then(|json| {
            let meeting = vanban::meeting_from_json(&json)?;
            cmd_render(Variant::Minutes(&meeting), &render)
        }),
        Commands::Conclusion { input, render } => read(&input).and_then(|json| {
            let meeting = vanban::meeting_from_json(&json)?;
            cmd_render(Variant::ConclusionNotice(&meeting), &render)
        }),
        Commands::Report { input, render } => read(&input).and_then(|json| {
            let meeting = vanban::meeting_from_json(&json)?;
            cmd_render(Variant::InternalReport(&meeting), &render)
        }),
        Commands::Aggregate { input, render } => read(&input).and_then(|json| {
            let meetings = vanban::meetings_from_json(&json)?;
            cmd_render(Variant::Aggregate(&meetings), &render)
        }),
        Commands::Classify { input } => cmd_classify(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path.display(), e).into())
}

fn cmd_render(variant: Variant<'_>, args: &RenderArgs) -> CliResult {
    log::debug!("rendering {} variant", variant.kind().name());
    let composer = Composer::new(args.compose_options());
    let doc = composer.compose(variant)?;
    let options = args.render_options();

    if let Some(ref path) = args.output {
        render::write_to_path(&doc, path, &options)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        render::write_to(&doc, io::stdout().lock(), &options)?;
        println!();
    }

    if args.stats {
        print_stats(&doc);
    }
    Ok(())
}

fn print_stats(doc: &RenderedDocument) {
    let stats = RenderStats::of(doc);
    eprintln!("{}", "Document Statistics".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    if let Some(ref title) = doc.metadata.title {
        eprintln!("{}: {}", "Title".bold(), title);
    }
    let orientation = if doc.page.is_landscape() {
        "landscape"
    } else {
        "portrait"
    };
    eprintln!("{}: A4 {}", "Page".bold(), orientation);
    eprintln!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    eprintln!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    eprintln!("{}: {}", "Page breaks".bold(), stats.page_break_count);
    eprintln!("{}: {}", "Characters".bold(), stats.char_count);
}

fn cmd_classify(input: &Path) -> CliResult {
    let text = read(input)?;
    for line in vanban::layout::body_lines(&text) {
        let label = match line.role {
            Some(role) => role_name(role).normal(),
            None => "blank".dimmed(),
        };
        println!("{:<16} {}", label, line.text.trim());
    }
    Ok(())
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::SectionHeading => "section_heading",
        Role::Article => "article",
        Role::Clause => "clause",
        Role::Point => "point",
        Role::Paragraph => "paragraph",
    }
}

fn cmd_version() {
    println!("{} {}", "vanban".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Vietnamese administrative document renderer");
    println!();
    println!("License: MIT");
}
