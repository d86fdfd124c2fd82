use std::path::Path;

use anyhow::Context;
use arc_reader::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let now = std::time::Instant::now();
    // Read paths to files from command line
    let arc_path = std::env::args()
        .nth(1)
        .context("No path to arc file given")?;
    let vertex_path = std::env::args().nth(2);

    let arcs = ArcList::from_path(Path::new(&arc_path))?;
    let coords = match vertex_path {
        Some(path) => Some(Coordinates::from_path(Path::new(&path))?),
        None => None,
    };

    let elapsed = now.elapsed();

    println!(
        "Finished reading input in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    println!("Read {} arcs", arcs.len());
    if let Some(coords) = coords {
        println!("Read {} vertex coordinates", coords.len());
    }
    Ok(())
}
