use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use slidedeck::Config;
use slidedeck::deck::Deck;
use slidedeck::navigation::RetainedView;
use slidedeck::printer::Printer;
use slidedeck::slide::Slide;
use slidedeck::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use slidedeck::window::Window;

fn log_controls() {
    info!("mouse: drag a slide left or right to change slides");
    info!("keyboard: Right/Space next, Left previous, Home first, End last, Esc fullscreen");
    info!("touch: swipe left or right (with --touch)");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let config = Config::parse();

    let image_paths = load_sorted_image_paths(&config.images_dir)
        .with_context(|| format!("loading slides from {}", config.images_dir.display()))?;

    let mut window = Window::open(&config);

    let mut slides = Vec::with_capacity(image_paths.len());
    for path in image_paths {
        let (rl, thread) = window.handle();
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => {
                let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                slides.push(Slide::new(texture, name));
            }
            Err(e) => warn!(error = %e, "skipping slide"),
        }
    }

    let mut deck = Deck::new(slides.len(), RetainedView::new()).context("no slides could be loaded")?;
    info!(slides = slides.len(), "deck ready");
    log_controls();

    let printer = Printer::new(&config.print_dir);

    while !window.should_close() {
        let layout = window.layout(slides.len());

        let Some(frame) = deck.controller().presenter().frame().cloned() else {
            break;
        };
        for event in window.poll_events(&layout, &frame) {
            deck.dispatch(event, &mut window);
        }

        if window.take_print_request() {
            match printer.print(&mut window, &slides) {
                Ok(pages) => info!(pages = pages.len(), dir = %printer.dir().display(), "print finished"),
                Err(e) => error!(error = %e, "print failed"),
            }
        }

        let Some(frame) = deck.controller().presenter().frame() else {
            break;
        };
        window.draw(frame, &slides, &layout);
    }

    Ok(())
}
