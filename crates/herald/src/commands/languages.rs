//! Languages command - list registered renderers.

use herald_codegen::registry::renderers;

pub fn run() {
    for renderer in renderers() {
        println!("{:<12} .{}", renderer.name(), renderer.extension());
    }
}
