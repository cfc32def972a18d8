//! The status bar window
//!
//! One undecorated window holding a DrawingArea. The render loop runs on the
//! GLib main loop; each tick hands its Frame to [`GtkPaintSink`], which keeps
//! it for the draw callback and queues a redraw.

use crate::config::AppConfig;
use anyhow::Result;
use doomguy_status_core::{Mapper, PaintSink, RenderLoop, SourceSampler, TICK_INTERVAL};
use doomguy_status_render::{paint_frame, SpriteCatalogue};
use doomguy_status_types::Frame;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

/// Title a window manager rule can match to pin the bar
pub const WINDOW_TITLE: &str = "Status Bar";

/// Paint sink that forwards frames to a DrawingArea
pub struct GtkPaintSink {
    area: DrawingArea,
    latest: Rc<RefCell<Frame>>,
}

impl GtkPaintSink {
    pub fn new(area: DrawingArea, latest: Rc<RefCell<Frame>>) -> Self {
        Self { area, latest }
    }
}

impl PaintSink for GtkPaintSink {
    fn paint(&mut self, frame: &Frame) -> Result<()> {
        *self.latest.borrow_mut() = frame.clone();
        self.area.queue_draw();
        Ok(())
    }
}

/// Build the window and start ticking
pub fn build_status_window(
    app: &Application,
    config: &AppConfig,
    catalogue: Rc<SpriteCatalogue>,
    sampler: SourceSampler,
) -> ApplicationWindow {
    let (width, height) = config.window.physical_size();
    log::info!("Window size {}x{}", width, height);

    let area = DrawingArea::builder()
        .content_width(width)
        .content_height(height)
        .build();

    let latest = Rc::new(RefCell::new(Frame::default()));

    {
        let latest = latest.clone();
        area.set_draw_func(move |_, cr, w, h| {
            if let Err(e) = paint_frame(cr, &catalogue, &latest.borrow(), w as f64, h as f64) {
                log::error!("Draw failed: {}", e);
            }
        });
    }

    let window = ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(width)
        .default_height(height)
        .resizable(false)
        .decorated(false)
        .child(&area)
        .build();

    let sink = GtkPaintSink::new(area, latest);
    let render_loop = Rc::new(RefCell::new(RenderLoop::new(
        sampler,
        sink,
        StdRng::from_entropy(),
        Mapper::new(config.ammo),
    )));

    // first frame right away, then once per interval
    render_loop.borrow_mut().tick();
    glib::timeout_add_local(TICK_INTERVAL, move || {
        render_loop.borrow_mut().tick();
        glib::ControlFlow::Continue
    });

    window
}
