mod config;
mod dom;
#[cfg(test)]
mod fixture;
mod fullscreen;
mod gallery;
mod input;
mod lightbox;
mod media;
mod renderer;

fn main() {
    gallery::mount();
}
