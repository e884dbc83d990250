use std::thread;
use std::time::{Duration, Instant};

use hosting::{load_scene, KitchenLoader, LoadingError, LoadingState, SceneLoader, SceneLoading, Step};

struct Counting {
    steps: u32,
    done: u32,
}

impl SceneLoader for Counting {
    type Scene = String;

    fn advance(&mut self) -> Result<Step<String>, LoadingError> {
        if self.done == self.steps {
            return Ok(Step::Done(format!("scene after {} steps", self.steps)));
        }
        self.done += 1;
        Ok(Step::Progress(self.done as f32 / self.steps as f32))
    }
}

struct Broken;

impl SceneLoader for Broken {
    type Scene = String;

    fn advance(&mut self) -> Result<Step<String>, LoadingError> {
        Err(LoadingError::Interrupted)
    }
}

struct Endless;

impl SceneLoader for Endless {
    type Scene = String;

    fn advance(&mut self) -> Result<Step<String>, LoadingError> {
        thread::sleep(Duration::from_millis(5));
        Ok(Step::Progress(0.1))
    }
}

fn poll_until_finished<S: Send + 'static>(loading: &mut SceneLoading<S>) -> LoadingState {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let state = loading.poll();
        if !matches!(state, LoadingState::Loading(_)) || Instant::now() > deadline {
            return state;
        }
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_scene_activated_once_after_loading() {
    let mut loading = SceneLoading::new("kitchen");
    assert_eq!(loading.state(), LoadingState::NotStarted);
    assert_eq!(loading.activate(), None);

    loading.start(Counting { steps: 3, done: 0 });

    assert_eq!(poll_until_finished(&mut loading), LoadingState::Ready);
    assert_eq!(loading.activate(), Some("scene after 3 steps".to_string()));
    assert_eq!(loading.state(), LoadingState::Activated);
    assert_eq!(loading.activate(), None);
}

#[test]
fn test_loader_error_fails_loading() {
    let mut loading = SceneLoading::new("broken");
    loading.start(Broken);

    assert_eq!(poll_until_finished(&mut loading), LoadingState::Failed);
    assert_eq!(loading.activate(), None);
}

#[test]
fn test_cancelled_loading_fails() {
    let mut loading = SceneLoading::new("endless");
    loading.start(Endless);
    loading.cancel();

    assert_eq!(poll_until_finished(&mut loading), LoadingState::Failed);
}

#[test]
fn test_kitchen_scene_loaded_synchronously() {
    let mut recipes = 0;
    load_scene("kitchen", KitchenLoader::new("../assets/kitchen.json"), |config| {
        recipes = config.recipes.len();
    })
    .unwrap();

    assert_eq!(recipes, 4);
}

#[test]
fn test_missing_kitchen_file_is_reported() {
    let result = load_scene("missing", KitchenLoader::new("../assets/missing.json"), |_| {});

    assert!(matches!(result, Err(LoadingError::Data(_))));
}
