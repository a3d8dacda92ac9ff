use {
    crate::Config,
    std::{io::IsTerminal, panic::PanicHookInfo},
    time::macros::format_description,
    tracing_subscriber::{EnvFilter, Layer, fmt::time::UtcTime, prelude::*},
};

/// Initializes the logger and installs a panic hook that logs panics.
/// `env_filter` in the config has similar syntax to env_logger. It is
/// documented at
/// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
///
/// All events are written to stderr. Stdout is reserved for the report the
/// binary prints.
pub fn initialize(config: &Config) {
    set_tracing_subscriber(config);
    std::panic::set_hook(Box::new(tracing_panic_hook));
}

fn set_tracing_subscriber(config: &Config) {
    let env_filter = EnvFilter::new(&config.env_filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::new(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        )))
        .with_ansi(std::io::stderr().is_terminal());

    // The json and the plain formatter are different types so each branch has
    // to build its own registry.
    if config.use_json_format {
        tracing_subscriber::registry()
            .with(layer.json().with_filter(env_filter))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(layer.with_filter(env_filter))
            .init();
    }
}

/// Panic hook that prints roughly the same message as the default panic hook
/// but uses tracing:error instead of stderr.
fn tracing_panic_hook(panic: &PanicHookInfo) {
    let thread = std::thread::current();
    let name = thread.name().unwrap_or("<unnamed>");
    let backtrace = std::backtrace::Backtrace::force_capture();
    tracing::error!("thread '{name}' {panic}\nstack backtrace:\n{backtrace}");
}
