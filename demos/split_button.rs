//! Headless run of the split button: tap once, then print every frame.
//!
//! ```text
//! RUST_LOG=info cargo run --example split_button -- [BASE_SIZE] [--realtime]
//! ```
//!
//! Without `--realtime` time is stepped by a manual clock at 60 fps, so the
//! output is identical on every run.

use std::time::Duration;

use splitplay::prelude::*;

const FRAME: Duration = Duration::from_micros(16_667);

fn describe(commands: &[DrawCommand]) -> String {
    commands
        .iter()
        .filter(|c| c.is_visible())
        .map(|c| {
            let r = c.visual_rect();
            format!("[x={:6.2} w={:5.2} a={:.2}]", r.x, r.width, c.opacity())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(screen: &mut SplitButton, clock: &dyn Clock, mut wait: impl FnMut()) {
    screen.layout((0.0, 0.0));
    screen.tick(clock.now());
    log::info!("rest    {}", describe(screen.paint().commands()));

    screen.tap(clock.now());
    let mut frame = 0u32;
    while screen.is_animating() {
        wait();
        frame += 1;
        if screen.tick(clock.now()) {
            log::info!(
                "frame {:3} {:?} {}",
                frame,
                screen.phase(),
                describe(screen.paint().commands())
            );
        }
    }
    log::info!("settled after {} frames, enabled={}", frame, screen.is_enabled());
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let realtime = args.iter().any(|a| a == "--realtime");
    let base_size = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    let config = match SplitButtonConfig::from_arg(base_size) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };
    log::info!("base size {} ({:?})", config.base_size, config.metrics());

    let mut screen = SplitButton::new(config);
    if realtime {
        let clock = SystemClock::new();
        run(&mut screen, &clock, || std::thread::sleep(FRAME));
    } else {
        let clock = ManualClock::new();
        let stepper = clock.clone();
        run(&mut screen, &clock, move || stepper.advance(FRAME));
    }
}
