// src/main.rs

use blochsphere::scene::SceneConfig;
use blochsphere::viewer;

fn window_conf() -> macroquad::window::Conf {
    viewer::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = SceneConfig::default();
    println!("--- blochsphere: interactive Bloch sphere ---");
    println!("Camera at {}, sphere {}x{} segments", config.camera.position, config.sphere_width_segments, config.sphere_height_segments);

    if let Err(e) = viewer::run(config).await {
        eprintln!("Viewer failed: {}", e);
        std::process::exit(1);
    }
}
