//! Readers for the plain text arc and vertex files a route query is built from.
//!
//! An arc file holds one undirected arc per line as `source target weight`,
//! separated by whitespace. A vertex file holds `id x y` per line and is only
//! needed to turn a path into a map link.
use anyhow::{bail, Context};
use log::info;
use serde::Deserialize;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

mod coordinates;
mod map_link;

pub use coordinates::Coordinates;
pub use map_link::{launch, map_link, MAX_LINK_POINTS};

/// Identifier of a vertex as it appears in the input files
pub type VertexId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Arc {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
}

impl Arc {
    pub fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

#[derive(Debug, Default)]
pub struct ArcList {
    arcs: Vec<Arc>,
}

impl ArcList {
    pub fn new() -> Self {
        ArcList { arcs: Vec::new() }
    }

    pub fn add_arc(&mut self, source: VertexId, target: VertexId, weight: f64) {
        self.arcs.push(Arc::new(source, target, weight));
    }

    pub fn get_arcs(&self) -> &Vec<Arc> {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Reads an arc file. Files with a `.csv` extension are read as
    /// `source,target,weight` records with a header row, everything else as
    /// whitespace separated lines.
    pub fn from_path(path: &Path) -> anyhow::Result<ArcList> {
        let now = std::time::Instant::now();
        info!("BEGIN parsing {}", path.display());

        let arcs = if path.extension().is_some_and(|ext| ext == "csv") {
            Self::from_csv(path)?
        } else {
            Self::from_text(path)?
        };

        info!(
            "FINISHED parsing {} arcs. Took {:?}",
            arcs.len(),
            now.elapsed()
        );
        Ok(arcs)
    }

    fn from_text(path: &Path) -> anyhow::Result<ArcList> {
        let file =
            File::open(path).with_context(|| format!("Could not open {}", path.display()))?;

        let mut arcs = ArcList::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let arc = parse_arc(&line)
                .with_context(|| format!("{}:{}: malformed arc", path.display(), i + 1))?;
            arcs.arcs.push(arc);
        }

        Ok(arcs)
    }

    fn from_csv(path: &Path) -> anyhow::Result<ArcList> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Could not open {}", path.display()))?;

        let mut arcs = ArcList::new();
        for result in reader.deserialize() {
            let arc: Arc = result.context("Failed to parse Arc")?;
            arcs.arcs.push(arc);
        }

        Ok(arcs)
    }
}

fn parse_arc(line: &str) -> anyhow::Result<Arc> {
    let mut fields = line.split_whitespace();

    let (Some(source), Some(target), Some(weight)) = (fields.next(), fields.next(), fields.next())
    else {
        bail!("expected `source target weight`, got {:?}", line);
    };

    Ok(Arc::new(
        source.parse().context("invalid source id")?,
        target.parse().context("invalid target id")?,
        weight.parse().context("invalid weight")?,
    ))
}
