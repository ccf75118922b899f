use std::path::PathBuf;

mod keymap;
mod run;

fn main() {
    env_logger::init();

    let rom = std::env::args()
        .nth(1)
        .expect("expected a ROM file path as the first argument");
    run::run(PathBuf::from(rom));
}
