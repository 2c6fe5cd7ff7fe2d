use anyhow::Result;
use glam::Vec2;
use log::{debug, info, trace};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use spirit_boxer::engine::game_loop::FrameClock;
use spirit_boxer::engine::input::{Action, InputManager};
use spirit_boxer::engine::renderer::{colors, Camera2D, DrawList, Renderer};
use spirit_boxer::game::level::{Level, LevelConfig, LevelData};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

/// Pixel art is drawn at 2x
const CAMERA_ZOOM: f32 = 2.0;

/// Screen position of the FPS counter; the pause banner goes one line below
const OVERLAY_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
const OVERLAY_LINE_HEIGHT: f32 = 20.0;

/// Everything the shell drives once per frame
struct Game {
    level: Level,
    input: InputManager,
    clock: FrameClock,
    camera: Camera2D,
    draw_list: DrawList,
}

impl Game {
    fn new(level: Level, width: f32, height: f32) -> Self {
        let mut camera = Camera2D::new(level.player().position(), width, height);
        camera.set_zoom(CAMERA_ZOOM);
        Self {
            level,
            input: InputManager::default(),
            clock: FrameClock::new(),
            camera,
            draw_list: DrawList::new(),
        }
    }

    /// Run one frame: shell actions, update, sound cues, draw.
    /// Returns false once the player asks to quit.
    fn frame(&mut self) -> bool {
        if self.input.just_pressed(Action::Menu) {
            return false;
        }
        if self.input.just_pressed(Action::Pause) {
            self.clock.toggle_pause();
        }
        if self.input.just_pressed(Action::ToggleDebug) {
            let enabled = !self.level.debug_draw();
            self.level.set_debug_draw(enabled);
            info!("Debug overlay {}", if enabled { "on" } else { "off" });
        }
        if self.input.just_pressed(Action::Restart) {
            self.level.reset();
        }

        if let Some(dt) = self.clock.tick() {
            self.level.update(dt, self.input.player());
        }

        // Audio lives outside the core; the shell only names the cue
        for event in self.level.drain_events() {
            match event.sound_cue() {
                Some(cue) => debug!("{:?} -> play {}", event, cue),
                None => debug!("{:?}", event),
            }
        }

        self.camera.follow(self.level.player().position());
        self.draw_list.clear();
        self.level.draw(&mut self.draw_list, &self.camera);
        self.draw_overlay();
        trace!(
            "Frame {}: {} draw commands ({} sprites), text {:?}",
            self.clock.frame_count(),
            self.draw_list.len(),
            self.draw_list.sprite_count(),
            self.draw_list.texts()
        );

        self.input.update();
        true
    }

    /// Screen-space text drawn over the level
    fn draw_overlay(&mut self) {
        let fps = format!("FPS: {:.3}", self.clock.fps());
        self.draw_list.draw_text(&fps, OVERLAY_ORIGIN, colors::WHITE);
        if self.clock.is_paused() {
            let position = OVERLAY_ORIGIN + Vec2::new(0.0, OVERLAY_LINE_HEIGHT);
            self.draw_list.draw_text("PAUSED", position, colors::YELLOW);
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Spirit Boxer...");

    let config = LevelConfig::default().with_seed_from_env();
    let level = Level::new(&LevelData::demo(), config)?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Spirit Boxer")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let size = window.inner_size();
    let mut game = Game::new(level, size.width as f32, size.height as f32);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
                game.camera
                    .resize(physical_size.width as f32, physical_size.height as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                game.input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                game.input.process_mouse_event(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never reach us
                game.input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if !game.frame() {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spirit_boxer::engine::renderer::DrawCommand;

    fn game() -> Game {
        let level = Level::new(&LevelData::demo(), LevelConfig::default()).unwrap();
        Game::new(level, 800.0, 600.0)
    }

    #[test]
    fn test_frame_draws_fps_counter() {
        let mut game = game();
        assert!(game.frame());

        let fps = game.draw_list.commands().iter().find_map(|c| match c {
            DrawCommand::Text {
                text,
                position,
                color,
            } if text.starts_with("FPS: ") => Some((text.clone(), *position, *color)),
            _ => None,
        });
        assert_eq!(
            fps,
            Some(("FPS: 0.000".to_string(), Vec2::new(10.0, 10.0), colors::WHITE))
        );
        assert!(!game.draw_list.texts().contains(&"PAUSED"));
    }

    #[test]
    fn test_paused_frame_shows_banner_and_freezes_level() {
        let mut game = game();
        game.clock.pause();
        let before = game.level.enemies().iter().map(|(_, e)| e.position()).collect::<Vec<_>>();

        assert!(game.frame());
        assert!(game.draw_list.texts().contains(&"PAUSED"));
        let after = game.level.enemies().iter().map(|(_, e)| e.position()).collect::<Vec<_>>();
        assert_eq!(before, after);
    }

    #[test]
    fn test_menu_quits_and_restart_revives_player() {
        let mut game = game();
        game.level.player_mut().die();
        game.input.player_mut().press(Action::Restart);
        assert!(game.frame());
        assert!(!game.level.player().is_dead());

        game.input.player_mut().press(Action::Menu);
        assert!(!game.frame());
    }
}
