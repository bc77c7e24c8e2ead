use std::path::PathBuf;
use clap::Parser;
use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};

/// Present a directory of images as a slide deck.
#[derive(Parser, Debug, Clone)]
#[command(name = "slidedeck", version)]
pub struct Config {
    /// Directory holding one image per slide, shown in file-name order
    pub images_dir: PathBuf,

    /// Where the print button writes PNG pages
    #[arg(long, default_value = "print")]
    pub print_dir: PathBuf,

    /// Start in fullscreen mode
    #[arg(long)]
    pub fullscreen: bool,

    /// Treat touch points as swipe gestures
    #[arg(long)]
    pub touch: bool,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,
}
