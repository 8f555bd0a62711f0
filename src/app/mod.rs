// Application layer: console menu, rendering and the interactive session built on the store.

pub mod demo;
pub mod menu;
pub mod render;
pub mod session;
