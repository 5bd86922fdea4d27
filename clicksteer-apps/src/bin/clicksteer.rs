use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{bail, Result};
use clap::Parser;
use clicksteer::{ClickSteerConfig, ClickSteerNode};
use clicksteer_apps::{
    resolve_config, utils::init_tracing, DirectoryFrameSource, ImageFileDisplay,
    JsonLinesPublisher, StdinPointerInput,
};
use clicksteer_interface::{DummyFrameSource, FrameSource};
use schemars::schema_for;
use tracing::{debug, info};

/// Steers a robot towards the point clicked on its camera view.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Args {
    /// Path to the setting file.
    #[arg(short, long)]
    config_path: Option<PathBuf>,
    /// Side length of the annotation square in pixels. Takes priority over
    /// the setting file specified by --config-path.
    #[arg(long, allow_negative_numbers = true)]
    annotation_size: Option<i64>,
    /// Directory of PNG/JPEG files replayed as the camera stream.
    #[arg(long)]
    frames_dir: Option<PathBuf>,
    /// Frame rate of the replayed stream.
    #[arg(long, default_value_t = 10.0)]
    fps: f64,
    /// Play the frames once instead of looping.
    #[arg(long)]
    once: bool,
    /// Path the annotated frame is written to.
    #[arg(short, long, default_value = "clicksteer_view.png")]
    output: PathBuf,
    /// Prints the default setting as TOML.
    #[arg(long)]
    show_default_config: bool,
    /// Prints the JSON schema of the setting file.
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    debug!(?args);

    if args.show_default_config {
        print!("{}", toml::to_string(&ClickSteerConfig::default())?);
        return Ok(());
    }
    if args.print_schema {
        let schema = schema_for!(ClickSteerConfig);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }
    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be a positive number (got {})", args.fps);
    }

    let config = resolve_config(args.config_path.as_deref(), args.annotation_size)?;
    let frames: Box<dyn FrameSource> = match &args.frames_dir {
        Some(dir) => Box::new(DirectoryFrameSource::new(
            dir,
            Duration::from_secs_f64(1.0 / args.fps),
            !args.once,
        )?),
        None => {
            info!("no --frames-dir given; steering without a camera stream");
            Box::new(DummyFrameSource::new())
        }
    };

    let publisher = Arc::new(JsonLinesPublisher::stdout());
    let node = ClickSteerNode::new(
        &config,
        publisher.clone(),
        publisher,
        ImageFileDisplay::new(args.output),
    )?;

    let stop_handle = node.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupted");
            stop_handle.stop();
        }
    });

    node.run(StdinPointerInput::new(), frames).await;
    Ok(())
}
