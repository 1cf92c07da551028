//! Entry point for the WASM application

pub fn main() {
    salon_hero::mount();
}
