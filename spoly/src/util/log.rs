pub fn init_simple_logger(l: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    let config = cb.build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto
    )
}

pub fn level_filter(verbosity: u8) -> log::LevelFilter {
    use log::LevelFilter::*;
    match verbosity {
        0 => Off,
        1 => Info,
        2 => Debug,
        _ => Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity() {
        use log::LevelFilter::*;
        assert_eq!(level_filter(0), Off);
        assert_eq!(level_filter(1), Info);
        assert_eq!(level_filter(2), Debug);
        assert_eq!(level_filter(3), Trace);
        assert_eq!(level_filter(9), Trace);
    }
}
