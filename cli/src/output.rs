#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Indented tree, one node per line
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}
