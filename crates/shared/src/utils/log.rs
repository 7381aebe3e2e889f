use tracing_subscriber::{EnvFilter, prelude::*};

pub fn init_logger() {
    let filter_fmt = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info")
            .add_directive("hyper=off".parse().expect("valid"))
            .add_directive("sqlx=warn".parse().expect("valid"))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_names(true)
        .with_ansi(true)
        .with_filter(filter_fmt);

    tracing_subscriber::registry().with(fmt_layer).init();
}
