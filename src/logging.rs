use std::io::Write;

/// Map the number of `-v` flags to a level filter.
pub fn level_for_verbosity(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

pub fn init_logger(verbosity: u8) {
    let level = level_for_verbosity(verbosity);

    // The opcua crate is chatty at debug; keep it at warn unless tracing.
    let opcua_level = if level >= log::LevelFilter::Trace {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let result = env_logger::Builder::default()
        .filter_level(level)
        .filter_module("opcua", opcua_level)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%H:%M:%S");
            let target = record.target();

            // Include the target when it is not our own module path
            if target != record.module_path().unwrap_or("unknown") {
                writeln!(
                    buf,
                    "[{timestamp}] {} [{target}]: {}",
                    record.level(),
                    record.args()
                )
            } else {
                writeln!(buf, "[{timestamp}] {}: {}", record.level(), record.args())
            }
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized at {level}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), log::LevelFilter::Info);
        assert_eq!(level_for_verbosity(1), log::LevelFilter::Debug);
        assert_eq!(level_for_verbosity(5), log::LevelFilter::Trace);
    }
}
