use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use log::info;

pub const QUIT_KEY: char = 'q';

/// Keys typed into console since last frame.
#[derive(Clone, Default)]
pub struct Input {
    pub time: f32,
    keys: Vec<char>,
    pub terminating: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.keys.clear();
    }

    pub fn handle(&mut self, key: char) {
        if key == QUIT_KEY {
            self.terminating = true;
        } else {
            self.keys.push(key);
        }
    }

    #[inline]
    pub fn keys(&self) -> &[char] {
        &self.keys
    }

    pub fn pressed(&self, key: char) -> bool {
        self.keys.contains(&key)
    }
}

pub struct Console {
    lines: Receiver<String>,
}

impl Console {
    pub fn spawn() -> Self {
        let (sender, lines) = channel();
        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(_) => break,
                };
                if sender.send(line).is_err() {
                    break;
                }
            }
            info!("Console input closed");
        });
        Self { lines }
    }

    pub fn poll(&self, input: &mut Input) {
        loop {
            match self.lines.try_recv() {
                Ok(line) => {
                    for key in line.chars().filter(|key| !key.is_whitespace()) {
                        input.handle(key.to_ascii_lowercase());
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    input.terminating = true;
                    break;
                }
            }
        }
    }
}
