//! Headless demo driving the folio camera rig and section choreography.

use std::path::Path;

use folio::animation::{Rect, SectionChoreography, SectionElement};
use folio::camera::{
    Camera, CameraRig, CameraUniform, PointerEvent, PointerSampler,
};
use folio::options::Options;
use folio::skills::{ProgressRing, SkillShowcase};
use folio::util::frame_timing::FrameTiming;
use rand::Rng;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 800;
const TARGET_FPS: u32 = 60;
/// Seconds the establishing shot is held before sway starts.
const ESTABLISHING_SHOT: f32 = 1.5;
/// Seconds of scripted playback.
const RUN_TIME: f32 = 9.0;
/// Scroll speed of the page once sway starts, in pixels per second.
const SCROLL_SPEED: f32 = 450.0;
/// Page offset of the skills section's top edge.
const SECTION_TOP: f32 = 1400.0;

fn load_options() -> Result<Options, folio::FolioError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let options = Options::load(Path::new(&path))?;
            log::info!("Loaded preset {path}");
            Ok(options)
        }
        None => {
            let dir = Path::new("assets/presets");
            let presets = Options::list_presets(dir);
            if !presets.is_empty() {
                log::info!("Available presets: {}", presets.join(", "));
            }
            Ok(Options::default())
        }
    }
}

/// Scripted cursor path: a slow figure eight over the viewport with a few
/// pixels of hand jitter.
fn scripted_cursor(time: f32, rng: &mut impl Rng) -> PointerEvent {
    let (w, h) = (WIDTH as f32, HEIGHT as f32);
    let x = (0.5 + 0.4 * (time * 0.7).sin()) * w;
    let y = (0.5 + 0.35 * (time * 1.4).sin()) * h;
    PointerEvent::CursorMoved {
        x: x + rng.random_range(-3.0_f32..3.0),
        y: y + rng.random_range(-3.0_f32..3.0),
    }
}

fn log_showcase() {
    let mut showcase = SkillShowcase::new();
    for id in [1, 2, 3, 4] {
        match showcase.select(id) {
            Ok(group) => {
                log::info!(
                    "{}: {} icons, {} skills",
                    group.title,
                    group.tech_icons.len(),
                    group.skills.len()
                );
                for (index, skill) in group.skills.iter().enumerate() {
                    let ring = ProgressRing::new(skill.percentage);
                    let delays = ProgressRing::reveal_delays(index);
                    log::debug!(
                        "  {} {}%: offset {:.1}, grey {}, stroke at {:.1}s",
                        skill.name,
                        ring.percentage(),
                        ring.dash_offset(),
                        ring.grey_level(),
                        delays.stroke
                    );
                }
            }
            Err(e) => log::warn!("{e}"),
        }
    }
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let aspect = WIDTH as f32 / HEIGHT as f32;
    let mut camera = Camera::from_options(&options, aspect);
    let mut uniform = CameraUniform::new();
    let mut rig = CameraRig::new(&options.rig);
    let mut sampler = PointerSampler::new(WIDTH, HEIGHT);
    let mut section = SectionChoreography::new(&options.section);
    let mut timing = FrameTiming::new(TARGET_FPS);
    let mut rng = rand::rng();

    log_showcase();

    let viewport = Rect::new(0.0, 0.0, WIDTH as f32, HEIGHT as f32);
    let mut elapsed = 0.0_f32;
    let mut scroll = 0.0_f32;
    let mut next_report = 0.0_f32;

    while elapsed < RUN_TIME {
        std::thread::sleep(timing.until_next_frame());
        let delta = timing.end_frame();
        elapsed += delta;

        if elapsed >= ESTABLISHING_SHOT {
            if !rig.is_tracking() {
                let _ = rig.activate();
            }
            scroll += SCROLL_SPEED * delta;
            sampler.handle_event(scripted_cursor(elapsed, &mut rng));
        }

        let _ = rig.update(&mut camera, sampler.sample(), delta);
        uniform.update_view_proj(&camera);

        let bounds = Rect::new(
            0.0,
            SECTION_TOP - scroll,
            WIDTH as f32,
            HEIGHT as f32,
        );
        let _ = section.observe(&bounds, &viewport);
        for start in section.tick(delta) {
            log::debug!(
                "{:?} keyframe #{} at {:.2}s",
                start.target,
                start.index,
                start.start
            );
        }

        if elapsed >= next_report {
            next_report += 1.0;
            let triangle = section.transform(SectionElement::Triangle0);
            log::info!(
                "t={elapsed:.1}s fps={:.0} {:?} eye={:.3} look={:.3} \
                 triangle0=({:.0}, {:.0}) x{:.2}",
                timing.fps(),
                rig.mode(),
                camera.eye,
                camera.target,
                triangle.x,
                triangle.y,
                triangle.scale
            );
        }
    }

    log::info!(
        "done: section finished={}, final eye {:?}",
        section.is_finished(),
        uniform.position
    );
}
