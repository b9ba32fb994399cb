use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the pipeline (cache first) and summarize the result.
    Load,
    /// Discard the cache and fetch every source again.
    Refresh,
    /// List crises matching the given filters.
    List(ListArgs),
    /// Show one crisis with its charities.
    Show(ShowArgs),
    /// Highlighted crises, the most urgent per region.
    Top(TopArgs),
    /// Heat-layer points for every crisis.
    Heat,
    /// Browse the charity catalog.
    Charities(CharitiesArgs),
    /// Local cache management.
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },
    /// Dump JSON schema for a core type.
    Schema(SchemaArgs),
}

/// Arguments for `crisismap list`.
#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// Crisis category to include (repeatable): conflict, natural_disaster,
    /// famine, disease, refugee.
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// Region to include (repeatable). Defaults to every region except global.
    #[arg(long = "region")]
    pub regions: Vec<String>,
    /// Lowest urgency tier to include (1-5).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub urgency_min: Option<u8>,
    /// Highest urgency tier to include (1-5).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub urgency_max: Option<u8>,
    /// Only highlighted crises.
    #[arg(long)]
    pub top_only: bool,
}

/// Arguments for `crisismap show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Crisis id, e.g. `crisis-003` or `gdacs-1102983`.
    pub id: String,
}

/// Arguments for `crisismap top`.
#[derive(Clone, Debug, Args)]
pub struct TopArgs {
    /// Restrict to one region.
    #[arg(long)]
    pub region: Option<String>,
}

/// Arguments for `crisismap charities`.
#[derive(Clone, Debug, Args)]
pub struct CharitiesArgs {
    /// Charities working on a crisis category.
    #[arg(long, conflicts_with = "search")]
    pub category: Option<String>,
    /// Case-insensitive match on name or focus area.
    #[arg(long)]
    pub search: Option<String>,
}

/// Local cache management.
#[derive(Clone, Debug, Subcommand)]
pub enum CacheCommands {
    /// Remove every cached entry.
    Clear,
}

/// Arguments for `crisismap schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: crisis, charity, filter.
    pub type_name: String,
}
