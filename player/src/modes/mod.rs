use crate::input::Input;
pub use gameplay::*;
pub use loading::*;

mod gameplay;
mod loading;

pub trait Mode {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn start(&mut self) {}

    #[allow(unused_variables)]
    fn update(&mut self, input: &Input) {}

    fn transition(&self) -> Option<Box<dyn Mode>> {
        None
    }

    fn finish(&mut self) {}
}
