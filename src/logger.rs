/// Sets up `env_logger`: everything is traced in verbose mode, nothing otherwise,
/// so prompts and error messages are the only regular console output.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();
}
