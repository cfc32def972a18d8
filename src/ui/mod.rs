//! GTK front end

mod status_window;

pub use status_window::{build_status_window, GtkPaintSink, WINDOW_TITLE};
