use std::io::Write;

/// `[time][LEVEL]message` lines on stderr, filtered by `RUST_LOG`
/// (default `info`).
pub fn init() {
    #[cfg(feature = "console")]
    console_subscriber::init();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}][{}]{}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
