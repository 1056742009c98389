use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "burndown")]
#[command(about = "Burndown charts for GitHub Projects boards", version)]
#[command(after_help = "EXAMPLES:
    burndown cards                     List project cards with their fields
    burndown chart                     Render today's burndown chart PNG
    burndown chart --out-dir reports   Render into a different directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Show the full error chain on failure
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List project cards with their normalized fields
    #[command(after_help = "EXAMPLES:
    burndown cards
    burndown cards --project PVT_kwDOBtcSac4Ak0uo
    burndown cards --json")]
    Cards(CardListArgs),
    /// Render the cumulative burndown chart as a PNG
    #[command(after_help = "EXAMPLES:
    burndown chart
    burndown chart --project PVT_kwDOBtcSac4Ak0uo
    burndown chart --out-dir reports/charts")]
    Chart(ChartArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    burndown completions bash > ~/.bash_completion.d/burndown
    burndown completions zsh > ~/.zfunc/_burndown
    burndown completions fish > ~/.config/fish/completions/burndown.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args)]
pub struct CardListArgs {
    /// Project node ID (defaults to PROJECT_ID env var or config default_project)
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Project node ID (defaults to PROJECT_ID env var or config default_project)
    #[arg(long)]
    pub project: Option<String>,

    /// Directory the chart PNG is written into
    #[arg(long, default_value = "burndown_charts")]
    pub out_dir: String,
}
