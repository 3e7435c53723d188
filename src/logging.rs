use glib::{GlibLogger, GlibLoggerDomain, GlibLoggerFormat};

static LOGGER: GlibLogger = GlibLogger::new(GlibLoggerFormat::Plain, GlibLoggerDomain::CrateTarget);

/// Routes `log` records into GLib's log writer next to GTK's own messages.
pub fn init(level: log::LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
