mod config;
mod error;
mod layout;
mod painter;
mod pipe;
mod print;
mod process_view;
mod pump;
mod tank;
mod timer;

pub use config::*;
pub use error::*;
pub use layout::SCENE_SIZE;
pub use painter::*;
pub use pipe::*;
pub use print::*;
pub use process_view::*;
pub use pump::*;
pub use tank::*;
pub use timer::*;
