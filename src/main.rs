mod audio;
mod command;
mod config;
mod display;
mod error;
mod inspect;
mod keys;
mod player;
mod runtime;
mod storage;

#[cfg(test)]
mod testing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
