use anyhow::Result;
use pong_core::{GameConfig, PongApp};
use pong_sdl2::App;
use pong_sdl2::{SdlContext, SdlInitInfo};

pub fn run(config: &GameConfig) -> Result<()> {
    let app = PongApp::new(config);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
