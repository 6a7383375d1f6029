mod draw;
mod replay;

use anyhow::{Context, Result, bail};
use draw::Canvas;
use log::info;
use posecam_base::init_logger;
use posecam_frame::{PixelLayout, SourceFrame};
use posecam_pipeline::{FramePipeline, PipelineConfig};
use replay::KeypointReplay;
use std::path::PathBuf;

const SKELETON_COLOR: [u8; 3] = [0, 255, 255];
const LANDMARK_COLOR: [u8; 3] = [255, 0, 0];
const USAGE: &str = "usage: pose-overlay <image> <keypoints.json> <output.png> [config.json]";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 || args.len() > 4 {
        bail!(USAGE);
    }
    let image_path = PathBuf::from(&args[0]);
    let keypoints_path = PathBuf::from(&args[1]);
    let output_path = PathBuf::from(&args[2]);

    let config = match args.get(3) {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    init_logger(config.log()).context("installing logger")?;

    let json = std::fs::read_to_string(&keypoints_path)
        .with_context(|| format!("reading {}", keypoints_path.display()))?;
    let model = KeypointReplay::from_json(&json)?;
    info!(
        "replaying {} values from {}",
        model.output().len(),
        keypoints_path.display()
    );

    let (mut rgb, width, height) = load_rgb(image_path.clone()).await?;
    info!("{}: {width}x{height}", image_path.display());

    let frame = SourceFrame::packed(width, height, PixelLayout::Rgb8, &rgb)?;
    let mut pipeline = FramePipeline::new(&config, model)?;
    let commands = pipeline.process(&frame)?.to_vec();
    info!("{} draw commands", commands.len());

    let Some(canvas) = Canvas::new(&mut rgb, width, height) else {
        bail!("decoded buffer does not match {width}x{height} RGB");
    };
    let mut canvas = canvas
        .with_line_color(SKELETON_COLOR)
        .with_point_color(LANDMARK_COLOR);
    canvas.render(&commands);

    save_png(rgb, width, height, output_path.clone()).await?;
    info!("wrote {}", output_path.display());
    Ok(())
}

/// Decodes an image file to packed RGB on the blocking pool.
async fn load_rgb(path: PathBuf) -> Result<(Vec<u8>, usize, usize)> {
    tokio::task::spawn_blocking(move || {
        let image = crates_image::open(&path)
            .with_context(|| format!("decoding {}", path.display()))?
            .to_rgb8();
        let (width, height) = image.dimensions();
        anyhow::Ok((image.into_raw(), width as usize, height as usize))
    })
    .await?
}

async fn save_png(rgb: Vec<u8>, width: usize, height: usize, path: PathBuf) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        crates_image::save_buffer_with_format(
            &path,
            &rgb,
            width as u32,
            height as u32,
            crates_image::ExtendedColorType::Rgb8,
            crates_image::ImageFormat::Png,
        )
        .with_context(|| format!("writing {}", path.display()))
    })
    .await?
}
