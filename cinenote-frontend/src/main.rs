pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    cinenote_app::run(cinenote_app::Config::from_build_env());
}
