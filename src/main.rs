//! Narshe Scene entry point
//!
//! On the web the page drives `SceneHandle` (see `platform::web`). Natively
//! this renders a few seconds of the scene headless and writes the final
//! frame as a PPM image.
//!
//! Usage: `narshe-scene [frames] [width] [height] [out.ppm]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is SceneHandle, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs::File;
    use std::io::BufWriter;

    use narshe_scene::{FrameScheduler, HeadlessHost, SceneConfig, SceneError, Viewport};

    /// Refresh interval of the simulated display
    const REFRESH_MS: f64 = 1000.0 / 60.0;

    fn arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> T {
        args.get(idx)
            .and_then(|s| s.parse().ok())
            .unwrap_or(default)
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let args: Vec<String> = std::env::args().collect();
        let frames: u32 = arg(&args, 1, 180);
        let width: f32 = arg(&args, 2, 800.0);
        let height: f32 = arg(&args, 3, 600.0);
        let out = args.get(4).cloned().unwrap_or_else(|| "narshe.ppm".into());

        log::info!("Narshe Scene (native) starting...");
        let config = SceneConfig {
            seed: Some(1),
            ..SceneConfig::load()
        };
        let mut scheduler = FrameScheduler::new(config)?;
        let host = HeadlessHost::new(Viewport::new(width, height, 1.0));
        if !scheduler.start(host)? {
            return Err(SceneError::SurfaceUnavailable("headless host has no surface".into()).into());
        }

        for i in 0..frames {
            scheduler.pump(i as f64 * REFRESH_MS);
        }

        if let Some(stats) = scheduler.stats() {
            log::info!(
                "Rendered {} frames at {} fps (simulated)",
                stats.frames_rendered,
                scheduler.fps()
            );
        }

        let surface = scheduler
            .surface()
            .ok_or_else(|| SceneError::SurfaceUnavailable("scene not mounted".into()))?;
        surface.write_ppm(BufWriter::new(File::create(&out)?))?;
        log::info!("Wrote {out}");

        scheduler.stop();
        Ok(())
    }
}
