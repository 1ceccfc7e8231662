//! Headless garage demo.
//!
//! Loads a layout, then drives a scripted session through the same input
//! path a windowed host would use: hover a part, click it, browse and buy
//! an alternative, pan the focused camera, right-click to let go. Every UI
//! update is logged.
//!
//! ```text
//! RUST_LOG=debug garage [LAYOUT.toml] [--options OPTIONS.toml] [--schema]
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use garage::engine::command::GarageCommand;
use garage::engine::GarageEngine;
use garage::error::GarageError;
use garage::input::{InputEvent, InputProcessor, MouseButton};
use garage::options::Options;
use garage::scene::{GarageLayout, InstanceBackend, MemoryScene, ObjectId};
use garage::selection::{AlternativeSummary, InfoSink, PartInfoView};
use glam::{Vec2, Vec3};

const DEFAULT_LAYOUT: &str = "assets/garage.toml";
const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const DT: f32 = 1.0 / 60.0;

/// Writes every panel update to the log.
struct LogPanel;

impl InfoSink for LogPanel {
    fn show_part_info(&mut self, info: &PartInfoView) {
        log::info!(
            "[info] {} ({}) {} dur {:.0}%{}",
            info.name,
            info.type_label,
            info.price_formatted,
            info.durability_fraction * 100.0,
            if info.alternatives_available {
                " [alternatives]"
            } else {
                ""
            }
        );
    }

    fn hide_part_info(&mut self) {
        log::info!("[info] hidden");
    }

    fn show_alternatives(&mut self, entries: &[AlternativeSummary]) {
        for entry in entries {
            log::info!(
                "[alternatives] #{} {} {} {}",
                entry.index,
                entry.name,
                entry.price_formatted,
                entry.durability_formatted
            );
        }
    }

    fn hide_alternatives(&mut self) {
        log::info!("[alternatives] hidden");
    }
}

struct Args {
    layout: PathBuf,
    options: Option<PathBuf>,
    schema: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        layout: PathBuf::from(DEFAULT_LAYOUT),
        options: None,
        schema: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--options" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--options needs a path".to_owned())?;
                args.options = Some(PathBuf::from(path));
            }
            "--schema" => args.schema = true,
            _ if arg.starts_with("--") => {
                return Err(format!("unknown flag {arg}"));
            }
            _ => args.layout = PathBuf::from(arg),
        }
    }
    Ok(args)
}

/// Drives an engine through an [`InputProcessor`], one frame per event
/// batch.
struct Session {
    engine: GarageEngine<MemoryScene, LogPanel>,
    input: InputProcessor,
}

impl Session {
    fn new(layout: &Path, options: Options) -> Result<Self, GarageError> {
        let layout = GarageLayout::load(layout)?;
        let (scene, parts) = MemoryScene::from_layout(&layout)?;
        let input = InputProcessor::with_options(options.input.clone());
        let engine = GarageEngine::new(
            scene,
            parts,
            LogPanel,
            options,
            VIEWPORT.x / VIEWPORT.y,
        );
        Ok(Self { engine, input })
    }

    fn step(&mut self, events: Vec<InputEvent>) {
        for event in events {
            self.input.handle_event(event);
        }
        let frame = self.input.end_frame(&self.engine.camera().camera, VIEWPORT);
        self.engine.frame(&frame, DT);
    }

    /// Pixel position of a world point in the current view.
    fn to_screen(&self, world: Vec3) -> Vec2 {
        let ndc = self
            .engine
            .camera()
            .camera
            .build_matrix()
            .project_point3(world);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * VIEWPORT.x,
            (1.0 - ndc.y) * 0.5 * VIEWPORT.y,
        )
    }

    fn point_at(&mut self, id: ObjectId) {
        let Some(position) = self
            .engine
            .parts()
            .get(id)
            .and_then(|p| self.engine.scene().world_position(p.nodes().root))
        else {
            return;
        };
        let pixel = self.to_screen(position);
        self.step(vec![InputEvent::CursorMoved {
            x: pixel.x,
            y: pixel.y,
        }]);
    }

    fn click(&mut self, button: MouseButton) {
        self.step(vec![
            InputEvent::MouseButton {
                button,
                pressed: true,
            },
            InputEvent::MouseButton {
                button,
                pressed: false,
            },
        ]);
    }

    fn hold_key(&mut self, code: &str, frames: usize) {
        self.input.handle_event(InputEvent::Key {
            code: code.to_owned(),
            pressed: true,
        });
        for _ in 0..frames {
            self.step(Vec::new());
        }
        self.step(vec![InputEvent::Key {
            code: code.to_owned(),
            pressed: false,
        }]);
    }

    fn execute(&mut self, command: GarageCommand) {
        if !self.engine.execute(command) {
            log::warn!("{command:?} did nothing");
        }
    }

    fn log_camera(&self, label: &str) {
        let camera = &self.engine.camera().camera;
        log::info!("[camera] {label}: eye {} -> {}", camera.eye, camera.target);
    }

    fn run(&mut self) {
        let target = self
            .engine
            .parts()
            .iter()
            .find(|p| !p.alternatives().is_empty())
            .or_else(|| self.engine.parts().iter().next())
            .map(garage::part::SelectableObject::id);
        let Some(target) = target else {
            log::warn!("layout has no parts");
            return;
        };

        let parts = self.engine.parts();
        if let Some(part_type) = parts.get(target).map(|p| p.record().part_type()) {
            log::info!(
                "{part_type} parts {:?}, interchangeable: {}",
                parts.parts_of_type(part_type),
                parts.has_alternatives_of_type(part_type)
            );
        }

        self.log_camera("start");
        self.hold_key("KeyA", 30);
        self.log_camera("orbited");

        self.point_at(target);
        log::info!("hovering {:?}", self.engine.selection().hovered());
        self.click(MouseButton::Left);
        self.log_camera("focused");

        self.execute(GarageCommand::ShowAlternatives);
        self.execute(GarageCommand::PreviewAlternative { index: 0 });
        self.execute(GarageCommand::DamageSelected { amount: 35.0 });
        self.execute(GarageCommand::BuyAlternative { index: 0 });
        self.execute(GarageCommand::CloseAlternatives);

        self.hold_key("KeyW", 60);
        self.log_camera("panned");

        self.click(MouseButton::Right);
        self.log_camera("released");

        for part in self.engine.parts().iter() {
            log::info!(
                "{}: {} worth {}",
                part.id(),
                part.record().name(),
                self.engine
                    .options()
                    .display
                    .format_price(part.record().current_value())
            );
        }
    }
}

fn write_schema() -> Result<(), Box<dyn std::error::Error>> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{schema}")?;
    Ok(())
}

fn main() {
    env_logger::init();

    let args = parse_args().unwrap_or_else(|e| {
        log::error!("{e}");
        log::error!(
            "Usage: garage [LAYOUT.toml] [--options OPTIONS.toml] [--schema]"
        );
        std::process::exit(1);
    });

    if args.schema {
        if let Err(e) = write_schema() {
            log::error!("could not write schema: {e}");
            std::process::exit(1);
        }
        return;
    }

    let options = args
        .options
        .as_deref()
        .map_or_else(|| Ok(Options::default()), Options::load)
        .unwrap_or_else(|e| {
            log::error!("{e}");
            std::process::exit(1);
        });

    let mut session =
        Session::new(&args.layout, options).unwrap_or_else(|e| {
            log::error!("{}: {e}", args.layout.display());
            std::process::exit(1);
        });
    session.run();
}
