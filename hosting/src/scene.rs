use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use kitchen::data::{DataError, KitchenConfig};
use log::{error, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadingState {
    NotStarted,
    Loading(f32),
    Ready,
    Activated,
    Failed,
}

pub enum Step<S> {
    Progress(f32),
    Done(S),
}

#[derive(Debug)]
pub enum LoadingError {
    Data(DataError),
    Cancelled,
    Interrupted,
}

impl From<DataError> for LoadingError {
    fn from(error: DataError) -> Self {
        Self::Data(error)
    }
}

impl From<std::io::Error> for LoadingError {
    fn from(error: std::io::Error) -> Self {
        Self::Data(DataError::Io(error))
    }
}

/// Loads scene step by step, progress within 0..1.
pub trait SceneLoader: Send + 'static {
    type Scene: Send + 'static;

    fn advance(&mut self) -> Result<Step<Self::Scene>, LoadingError>;
}

enum Report<S> {
    Progress(f32),
    Ready(S),
    Failed(LoadingError),
}

pub struct SceneLoading<S> {
    name: String,
    state: LoadingState,
    scene: Option<S>,
    cancelled: Arc<AtomicBool>,
    reports: Option<Receiver<Report<S>>>,
}

impl<S: Send + 'static> SceneLoading<S> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: LoadingState::NotStarted,
            scene: None,
            cancelled: Arc::new(AtomicBool::new(false)),
            reports: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn start<L>(&mut self, mut loader: L)
    where
        L: SceneLoader<Scene = S>,
    {
        if self.state != LoadingState::NotStarted {
            return;
        }
        info!("Begin scene {} loading", self.name);
        let (sender, receiver) = channel();
        let cancelled = self.cancelled.clone();
        thread::spawn(move || loop {
            if cancelled.load(Ordering::Relaxed) {
                let _ = sender.send(Report::Failed(LoadingError::Cancelled));
                break;
            }
            let report = match loader.advance() {
                Ok(Step::Progress(progress)) => Report::Progress(progress.clamp(0.0, 1.0)),
                Ok(Step::Done(scene)) => Report::Ready(scene),
                Err(error) => Report::Failed(error),
            };
            let finished = !matches!(report, Report::Progress(_));
            if sender.send(report).is_err() || finished {
                break;
            }
        });
        self.reports = Some(receiver);
        self.state = LoadingState::Loading(0.0);
    }

    /// Applies every progress report received since last poll.
    pub fn poll(&mut self) -> LoadingState {
        let receiver = match &self.reports {
            Some(receiver) => receiver,
            None => return self.state,
        };
        let mut finished = false;
        loop {
            match receiver.try_recv() {
                Ok(Report::Progress(progress)) => self.state = LoadingState::Loading(progress),
                Ok(Report::Ready(scene)) => {
                    info!("End scene {} loading", self.name);
                    self.scene = Some(scene);
                    self.state = LoadingState::Ready;
                    finished = true;
                }
                Ok(Report::Failed(error)) => {
                    error!("Unable to load scene {}, {:?}", self.name, error);
                    self.state = LoadingState::Failed;
                    finished = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !finished {
                        error!("Scene {} loader interrupted", self.name);
                        self.state = LoadingState::Failed;
                    }
                    finished = true;
                    break;
                }
            }
            if finished {
                break;
            }
        }
        if finished {
            self.reports = None;
        }
        self.state
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Hands out loaded scene, only once and only when ready.
    pub fn activate(&mut self) -> Option<S> {
        if self.state != LoadingState::Ready {
            return None;
        }
        self.state = LoadingState::Activated;
        self.scene.take()
    }
}

/// Loads scene on current thread and passes it to completion callback.
pub fn load_scene<L, F>(name: &str, mut loader: L, on_complete: F) -> Result<(), LoadingError>
where
    L: SceneLoader,
    F: FnOnce(L::Scene),
{
    info!("Begin scene {} loading", name);
    loop {
        match loader.advance()? {
            Step::Progress(_) => continue,
            Step::Done(scene) => {
                info!("End scene {} loading", name);
                on_complete(scene);
                return Ok(());
            }
        }
    }
}

/// Reads kitchen configuration file then parses it.
pub struct KitchenLoader {
    path: PathBuf,
    json: Option<String>,
}

impl KitchenLoader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            json: None,
        }
    }
}

impl SceneLoader for KitchenLoader {
    type Scene = KitchenConfig;

    fn advance(&mut self) -> Result<Step<KitchenConfig>, LoadingError> {
        match self.json.take() {
            None => {
                self.json = Some(fs::read_to_string(&self.path)?);
                Ok(Step::Progress(0.5))
            }
            Some(json) => Ok(Step::Done(KitchenConfig::parse(&json)?)),
        }
    }
}
