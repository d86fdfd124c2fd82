use anyhow::{bail, Context};
use log::info;
use std::process::Command;

use crate::{Coordinates, VertexId};

const MAPS_URL: &str = "https://www.google.es/maps/dir/";

/// The directions service refuses routes with more waypoints than this.
pub const MAX_LINK_POINTS: usize = 20;

/// Builds a directions link visiting every vertex of `path` in order.
pub fn map_link(path: &[VertexId], coords: &Coordinates) -> anyhow::Result<String> {
    if path.len() >= MAX_LINK_POINTS {
        bail!(
            "The path has {} points, the maps service accepts less than {}",
            path.len(),
            MAX_LINK_POINTS
        );
    }

    let mut link = String::from(MAPS_URL);
    for id in path {
        let (x, y) = coords
            .get(*id)
            .with_context(|| format!("No coordinates for vertex {}", id))?;
        link.push_str(x);
        link.push(',');
        link.push_str(y);
        link.push('/');
    }

    Ok(link)
}

/// Opens `link` with the default browser of the host.
pub fn launch(link: &str) -> anyhow::Result<()> {
    info!("Opening {}", link);

    let status = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", link]).status()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(link).status()
    } else {
        Command::new("xdg-open").arg(link).status()
    }
    .context("Could not start the browser")?;

    if !status.success() {
        bail!("Browser exited with {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> Coordinates {
        let mut coords = Coordinates::new();
        coords.insert(1, "40.1", "-3.1");
        coords.insert(2, "40.2", "-3.2");
        coords
    }

    #[test]
    fn link_lists_waypoints() {
        let link = map_link(&[1, 2], &coords()).unwrap();

        assert_eq!(link, "https://www.google.es/maps/dir/40.1,-3.1/40.2,-3.2/");
    }

    #[test]
    fn link_needs_coordinates() {
        assert!(map_link(&[1, 3], &coords()).is_err());
    }

    #[test]
    fn long_paths_are_refused() {
        let path: Vec<VertexId> = (0..MAX_LINK_POINTS as u64).collect();

        let err = map_link(&path, &coords()).unwrap_err();

        assert!(format!("{err}").contains("20 points"));
    }
}
