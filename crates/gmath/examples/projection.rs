//! Projects the corners of a rotated cube to normalized device coordinates.
//!
//! Usage: `projection [fov-degrees] [aspect] [near] [far]`

use anyhow::{bail, Context};
use gmath::{vec3, Handedness, Mat3f, Mat4f, Quat, Vec3f};
use log::LevelFilter;

fn arg(args: &[String], index: usize, name: &str, default: f32) -> anyhow::Result<f32> {
    match args.get(index) {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid value for {name}: '{s}'")),
        None => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("gmath"), LevelFilter::Trace)
        .parse_default_env()
        .try_init()
        .ok();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let fov = arg(&args, 0, "fov", 60.0)?;
    let aspect = arg(&args, 1, "aspect", 16.0 / 9.0)?;
    let near = arg(&args, 2, "near", 0.1)?;
    let far = arg(&args, 3, "far", 100.0)?;
    if near <= 0.0 || far <= near {
        bail!("expected 0 < near < far, got near={near} far={far}");
    }

    let projection = Mat4f::perspective(fov.to_radians(), aspect, near, far, Handedness::Right);
    log::info!("projection matrix:\n{projection}");

    // Camera 5 units behind the origin, looking down -Z.
    let camera = Mat3f::IDENTITY.with_translation(vec3(0.0, 0.0, 5.0));
    let view = camera
        .try_inverse()
        .context("camera transform is not invertible")?;

    let model = Mat4f::from(Quat::from_euler_degrees(30.0, 45.0, 0.0));
    let view_projection = projection * view * model;

    for corner in 0..8 {
        let pos = Vec3f::from_fn(|axis| if corner & (1 << axis) != 0 { 0.5 } else { -0.5 });
        let clip = view_projection * pos.extend(1.0);
        let ndc = clip.truncate() / clip.w();
        let visible = ndc.as_slice().iter().all(|c| (-1.0..=1.0).contains(c));
        log::info!("{pos} -> {ndc} (visible: {visible})");
    }

    Ok(())
}
