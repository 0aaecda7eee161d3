// File: crates/align-demo/src/main.rs
// Summary: Compares a measured sheet against the A4 design, prints the report and writes target/out/comparison.png.

use align_core::{draw_comparison, FigureOptions, Quad, SAMPLE_ACTUAL};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let design = Quad::a4();
    let (figure, png) = draw_comparison(design.points(), &SAMPLE_ACTUAL, &FigureOptions::default())?;

    let out = PathBuf::from("target/out/comparison.png");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&out, &png).with_context(|| format!("writing {}", out.display()))?;

    match figure.comparison.rotation_deg {
        Some(a) => info!("actual sheet rotated {a:+.3} deg relative to design"),
        None => info!("actual sheet rotation undefined"),
    }
    print!("{}", figure.report);
    println!("Wrote {}", out.display());
    Ok(())
}
