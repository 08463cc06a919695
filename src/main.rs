use shapedraw::config::WindowConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = shapedraw::window::run(WindowConfig::default()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
