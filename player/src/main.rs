use std::thread;
use std::time::{Duration, Instant};

use kitchen::timing::GameMode;
use log::info;

use crate::input::{Console, Input};
use crate::modes::{Loading, Mode};

pub mod input;
pub mod modes;

fn main() {
    env_logger::init();
    info!("OS: {}", std::env::consts::OS);

    let mode = match std::env::args().nth(1).as_deref() {
        Some("challenging") => GameMode::Challenging,
        _ => GameMode::Casual,
    };
    let assets = std::env::var("KITCHEN_ASSETS").unwrap_or_else(|_| "assets".to_string());
    info!("Game mode: {:?}, assets: {}", mode, assets);

    let mut mode: Box<dyn Mode> = Loading::new(&assets, mode);
    info!("Start {:?}", mode.name());
    mode.start();

    let console = Console::spawn();
    let mut time = Instant::now();
    let mut input = Input::new();
    loop {
        input.reset();
        input.time = time.elapsed().as_secs_f32();
        time = Instant::now();
        console.poll(&mut input);

        if input.terminating {
            break;
        }

        mode.update(&input);
        if let Some(next) = mode.transition() {
            info!("Finish {:?}", mode.name());
            mode.finish();
            mode = next;
            info!("Start {:?}", mode.name());
            mode.start();
        }

        thread::sleep(Duration::from_millis(16))
    }
    info!("Finish {:?}", mode.name());
    mode.finish();
    info!("Bye!");
}
