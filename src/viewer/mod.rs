// src/viewer/mod.rs

//! macroquad front end: draws a [`Scene`] and binds a [`ControlPanel`] to
//! immediate-mode sliders.

use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::controls::ControlPanel;
use crate::core::{BlochError, Vector3};
use crate::scene::{Arrow, CameraConfig, Rgba, Scene, SceneConfig};

const WINDOW_TITLE: &str = "Bloch Sphere";
const PANEL_MARGIN: f32 = 10.0;
const PANEL_HEIGHT: f32 = 190.0;
// The default UI font only covers ASCII.
const THETA_LABEL: &str = "theta (rad)";
const PHI_LABEL: &str = "phi (rad)";
// Below this the f32 slider round trip is noise, not a user edit.
const SLIDER_EPSILON: f64 = 1e-6;

/// Window settings for `#[macroquad::main]`.
pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        sample_count: 4,
        ..Default::default()
    }
}

/// Runs the render loop until the window closes.
pub async fn run(config: SceneConfig) -> Result<(), BlochError> {
    let mut scene = Scene::new(&config)?;
    let mut panel = ControlPanel::new();
    scene.apply(panel.state());

    loop {
        scene.resize(screen_width() as f64, screen_height() as f64);
        clear_background(to_color(scene.background));

        set_camera(&to_camera(&scene.camera));
        draw_scene(&scene);

        set_default_camera();
        if draw_panel(&mut panel) {
            scene.apply(panel.state());
        }

        next_frame().await;
    }
}

fn to_vec3(v: Vector3) -> Vec3 {
    vec3(v.x as f32, v.y as f32, v.z as f32)
}

fn to_color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

fn to_camera(camera: &CameraConfig) -> Camera3D {
    Camera3D {
        position: to_vec3(camera.position),
        target: to_vec3(camera.target),
        up: to_vec3(camera.up),
        fovy: camera.fov_radians() as f32,
        aspect: Some(camera.aspect as f32),
        ..Default::default()
    }
}

fn draw_scene(scene: &Scene) {
    let wire = to_color(scene.sphere.color);
    for (a, b) in scene.sphere.segments() {
        draw_line_3d(to_vec3(*a), to_vec3(*b), wire);
    }
    for arrow in scene.arrows() {
        draw_arrow(arrow, scene.arrow_head_segments);
    }
}

fn draw_arrow(arrow: &Arrow, head_segments: usize) {
    let color = to_color(arrow.color);
    for (a, b) in arrow.geometry(head_segments).segments() {
        draw_line_3d(to_vec3(a), to_vec3(b), color);
    }
}

/// Draws the control window; returns whether the mapped state changed.
fn draw_panel(panel: &mut ControlPanel) -> bool {
    let mut theta = panel.theta.value() as f32;
    let mut phi = panel.phi.value() as f32;
    let mut randomize = false;
    let mut reset = false;

    let position = vec2(screen_width() - panel.width - PANEL_MARGIN, PANEL_MARGIN);
    widgets::Window::new(hash!(), position, vec2(panel.width, PANEL_HEIGHT))
        .label("Controls")
        .movable(false)
        .ui(&mut root_ui(), |ui| {
            let theta_range = panel.theta.min as f32..panel.theta.max as f32;
            ui.slider(hash!(), THETA_LABEL, theta_range, &mut theta);
            let phi_range = panel.phi.min as f32..panel.phi.max as f32;
            ui.slider(hash!(), PHI_LABEL, phi_range, &mut phi);
            ui.separator();

            ui.label(None, panel.folder_title);
            ui.label(None, &panel.state().amplitudes.ascii());
            ui.label(None, &format!("Bloch vector {}", panel.state().direction.physics()));
            ui.separator();

            randomize = ui.button(None, "Random");
            reset = ui.button(None, "Reset");
        });

    if randomize {
        return panel.randomize();
    }
    if reset {
        return panel.reset();
    }

    let mut changed = false;
    if (theta as f64 - panel.theta.value()).abs() > SLIDER_EPSILON {
        changed |= panel.set_theta(theta as f64);
    }
    if (phi as f64 - panel.phi.value()).abs() > SLIDER_EPSILON {
        changed |= panel.set_phi(phi as f64);
    }
    changed
}
