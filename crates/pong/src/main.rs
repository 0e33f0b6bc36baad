use pong_core::GameConfig;

fn main() {
    env_logger::init();

    let config = GameConfig::default();
    log::info!(
        "Left paddle: {} / {}, right paddle: {} / {}, Escape quits",
        config.left_controls.up_key,
        config.left_controls.down_key,
        config.right_controls.up_key,
        config.right_controls.down_key
    );

    if let Err(err) = pong::run(&config) {
        log::error!("Pong failed to start: {:#}", err);
        std::process::exit(1);
    }
}
