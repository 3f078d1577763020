//! Topobrush - headless driver for the topological mesh brush
//!
//! Builds a demo mesh, owns the painting session, and replays a scripted
//! interaction through the brush controller, logging what each event did.

use std::process::ExitCode;

use topobrush::{BrushController, BrushOutcome, Session};
use topobrush_config::TopobrushConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

mod input;
mod mesh;

/// Grid resolution of the demo mesh
const DEMO_GRID_CELLS: u32 = 24;

/// `RUST_LOG`-style directives, falling back to `info` when none are given
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn main() -> ExitCode {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt().with_env_filter(log_filter(&rust_log)).init();

    let config = TopobrushConfig::from_env();
    info!(
        "Starting Topobrush: {}x{} viewport, radius {}",
        config.display.width, config.display.height, config.brush.radius
    );

    let (positions, triangles) = mesh::prepared_grid(DEMO_GRID_CELLS, config.mesh.scale);

    let mut session = match Session::new(positions, triangles, &config) {
        Ok(session) => session,
        Err(err) => {
            error!("Cannot start session: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let mut brush = BrushController::new(&config.brush);

    for event in input::demo_script(config.display.width, config.display.height) {
        match brush.handle_event(&mut session, event) {
            Ok(BrushOutcome::Painted { hit, triangles }) => {
                info!(
                    "{}: {} triangles around {} ({:.3} from camera)",
                    brush.status().mode.label(),
                    triangles.len(),
                    hit.triangle.0,
                    hit.distance
                );
            }
            Ok(BrushOutcome::Cleared) => info!("Missed the mesh, colors cleared"),
            Ok(_) => {}
            Err(err) => {
                error!("Brush event {:?} failed: {}", event, err);
                return ExitCode::FAILURE;
            }
        }

        // Stands in for the renderer's buffer upload
        if session.colors().is_dirty() {
            session.colors_mut().clear_dirty();
        }
    }

    let status = brush.status();
    info!(
        "Done: radius {}, mode {}, {} triangles selected this session",
        status.radius,
        status.mode.label(),
        session.selector().selected().len()
    );

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_directives() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            log_filter("warn,topobrush=trace").max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
