use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fenbook")]
#[command(about = "A terminal-based chess diagram workbook editor", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Base URL of the rendering service (or set FENBOOK_SITE_URL)
    #[arg(long, value_name = "URL", env = "FENBOOK_SITE_URL")]
    pub site: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the FEN entries in an import file
    Validate(ValidateArgs),
    /// Generate a PDF workbook from an import file
    Generate(GenerateArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Import file, one entry per line: `<fen>` or `<fen> // <caption>`
    #[arg(value_name = "FILE")]
    pub file: String,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Import file, one entry per line: `<fen>` or `<fen> // <caption>`
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Where to save the generated document
    #[arg(long, short)]
    pub output: Option<String>,

    /// Workbook title printed on the first page
    #[arg(long)]
    pub title: Option<String>,

    /// Diagrams per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Padding around each diagram, applied to all four sides
    #[arg(long)]
    pub padding: Option<f64>,

    /// Light square color as a hex string
    #[arg(long)]
    pub light: Option<String>,

    /// Dark square color as a hex string
    #[arg(long)]
    pub dark: Option<String>,

    /// Outer border color as a hex string
    #[arg(long)]
    pub border: Option<String>,

    /// Inner border color as a hex string
    #[arg(long)]
    pub inner_border: Option<String>,

    /// Largest per-page count rendered in a single column
    #[arg(long)]
    pub single_column_max: Option<u32>,

    /// Largest per-page count rendered in two columns
    #[arg(long)]
    pub two_column_max: Option<u32>,

    /// Mark whose turn it is under each diagram
    #[arg(long)]
    pub turn_indicator: bool,

    /// Number the pages
    #[arg(long)]
    pub page_numbers: bool,

    /// Omit file and rank labels around the boards
    #[arg(long)]
    pub no_coordinates: bool,
}
