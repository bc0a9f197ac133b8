//! smdview: load a model file and report its contents.
//! Logging + CLI flags, format sniffing through the module registry.

use anyhow::{Context, Result, anyhow, bail};
use asset::format;
use corelib::bounds::Aabb;

fn parse_frame_arg() -> i32 {
    // Accept: --frame=N (default 0)
    let mut frame = 0;
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--frame=") {
            match val.parse::<i32>() {
                Ok(n) => frame = n,
                Err(_) => {
                    eprintln!("[warn] Bad --frame value '{}', using 0.", val);
                }
            }
        }
    }
    frame
}

fn parse_input_path() -> Option<String> {
    std::env::args().skip(1).find(|arg| !arg.starts_with("--"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = parse_input_path() else {
        bail!("Usage: smdview <model.smd> [--frame=N]");
    };
    let frame = parse_frame_arg();

    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read model file: {}", path))?;

    let module = format::find_format(&path, &bytes)
        .ok_or_else(|| anyhow!("No model format recognizes '{}'", path))?;
    log::info!(
        "Format: {} (module v{}), frame {}",
        module.display_name,
        module.version,
        frame
    );

    let model = (module.load)(&path, frame, &bytes)?;

    log::info!(
        "Model '{}': {} surface(s), {} vertices, {} triangles",
        model.name,
        model.surfaces.len(),
        model.vertex_count(),
        model.triangle_count()
    );
    for surface in &model.surfaces {
        log::info!(
            "  surface '{}': {} vertices, {} triangles",
            surface.name,
            surface.vertex_count(),
            surface.triangle_count()
        );
    }

    let points = model
        .surfaces
        .iter()
        .flat_map(|s| s.positions.iter().copied());
    if let Some(bounds) = Aabb::from_points(points) {
        log::info!(
            "Bounds: min={:?} max={:?} extents={:?}",
            bounds.min,
            bounds.max,
            bounds.extents()
        );
    }

    Ok(())
}
