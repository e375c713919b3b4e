//! Rendering des Plots über den egui-Painter.

pub mod plot;

pub use plot::paint_plot;
