use anyhow::{bail, Context};
use log::info;
use rustc_hash::FxHashMap;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::VertexId;

/// Coordinates of the vertices, kept as the strings found in the vertex file
/// so they end up in a map link exactly as written.
#[derive(Debug, Default)]
pub struct Coordinates {
    coords: FxHashMap<VertexId, (String, String)>,
}

impl Coordinates {
    pub fn new() -> Self {
        Coordinates {
            coords: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, id: VertexId, x: impl Into<String>, y: impl Into<String>) {
        self.coords.insert(id, (x.into(), y.into()));
    }

    pub fn get(&self, id: VertexId) -> Option<(&str, &str)> {
        self.coords
            .get(&id)
            .map(|(x, y)| (x.as_str(), y.as_str()))
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Coordinates> {
        info!("BEGIN parsing {}", path.display());
        let file =
            File::open(path).with_context(|| format!("Could not open {}", path.display()))?;

        let mut coords = Coordinates::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let (Some(id), Some(x), Some(y)) = (fields.next(), fields.next(), fields.next())
            else {
                if line.trim().is_empty() {
                    continue;
                }
                bail!("{}:{}: expected `id x y`", path.display(), i + 1);
            };

            let id = id
                .parse()
                .with_context(|| format!("{}:{}: invalid vertex id", path.display(), i + 1))?;
            coords.insert(id, x, y);
        }

        info!("FINISHED parsing {} vertices", coords.len());
        Ok(coords)
    }
}
