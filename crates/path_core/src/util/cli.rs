use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::VertexId;

/// Frontier implementation used by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FrontierKind {
    /// Scan all unsettled vertices on every step
    #[default]
    Linear,
    /// Indexed binary heap
    Heap,
}

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the arc file (`source target weight` per line, or a .csv file)
    arcs: PathBuf,

    /// ID of the source vertex
    source: VertexId,

    /// ID of the target vertex
    target: VertexId,

    /// Path to the vertex file (`id x y` per line). Enables the map link
    #[arg(short, long, value_name = "file")]
    vertices: Option<PathBuf>,

    /// Frontier used by Dijkstra's algorithm
    #[arg(short, long, value_enum, default_value_t = FrontierKind::Linear)]
    frontier: FrontierKind,

    /// Open the map link in the default browser
    #[arg(long, requires = "vertices")]
    open: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub arcs_file: PathBuf,
    pub vertices_file: Option<PathBuf>,
    pub source: VertexId,
    pub target: VertexId,
    pub frontier: FrontierKind,
    pub open_link: bool,
    pub json: bool,
}

impl Cli {
    fn into_cfg(self) -> Cfg {
        Cfg {
            arcs_file: self.arcs,
            vertices_file: self.vertices,
            source: self.source,
            target: self.target,
            frontier: self.frontier,
            open_link: self.open,
            json: self.json,
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into_cfg()
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cli::into_cfg)
}
