use arc_reader::{launch, map_link, Coordinates};
use log::{info, warn};
use path_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let g = Graph::from_arcs(&cfg.arcs_file)?;

    let sp = match cfg.frontier {
        FrontierKind::Linear => query::<LinearFrontier>(&g, &cfg)?,
        FrontierKind::Heap => query::<HeapFrontier>(&g, &cfg)?,
    };

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&sp)?);
        return Ok(());
    }

    if !sp.is_reachable() {
        println!("No path from {} to {}", cfg.source, cfg.target);
        return Ok(());
    }

    println!(
        "Path from {} to {} has a distance of {}:",
        cfg.source, cfg.target, sp.weight
    );
    println!("Path size: {}", sp.len());
    println!("Path: {}", sp);
    println!();

    if let Some(vertices_file) = &cfg.vertices_file {
        let coords = Coordinates::from_path(vertices_file)?;
        match map_link(&sp.nodes, &coords) {
            Ok(link) => {
                println!("{}", link);
                if cfg.open_link {
                    launch(&link)?;
                }
            }
            Err(err) => {
                warn!("Skipping map link: {:#}", err);
                println!("Exception: {}", err);
            }
        }
    }

    Ok(())
}

fn query<F: Frontier>(g: &Graph, cfg: &Cfg) -> anyhow::Result<ShortestPath> {
    let mut dijkstra = Dijkstra::<_, F>::with_frontier(g);
    let sp = dijkstra.shortest_path(&cfg.source, &cfg.target)?;
    info!("{}", dijkstra.stats);
    Ok(sp)
}
