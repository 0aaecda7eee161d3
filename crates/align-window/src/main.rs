// File: crates/align-window/src/main.rs
// Summary: Shows the comparison figure in a native window by blitting the CPU render (winit + softbuffer).
// Keys: T cycles theme presets, Esc closes. The figure is re-rendered at the window size on resize.

use align_core::{compare, theme, Figure, FigureOptions, Quad, SAMPLE_ACTUAL};
use anyhow::{Context, Result};
use log::{error, info};
use std::num::NonZeroU32;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    env_logger::init();

    // Validate and compute before any window exists.
    let cmp = compare(Quad::a4().points(), &SAMPLE_ACTUAL)?;
    let figure = Figure::new(&cmp);
    let themes = theme::presets();
    let mut theme_idx = 0usize;

    let defaults = FigureOptions::default();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Design vs actual position")
        .with_inner_size(winit::dpi::LogicalSize::new(defaults.width as f64, defaults.height as f64))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;
    info!("window open; T cycles theme, Esc closes");

    let mut size = window.inner_size();

    let mut draw = move |size: PhysicalSize<u32>, theme_idx: usize| -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        surface
            .resize(w, h)
            .map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;

        let opts = FigureOptions {
            width: w.get() as i32,
            height: h.get() as i32,
            theme: themes[theme_idx % themes.len()],
            ..FigureOptions::default()
        };
        let (rgba, ..) = figure.render_to_rgba8(&opts)?;

        let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            // softbuffer expects 0RGB
            *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
        }
        frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
        Ok(())
    };

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                    VirtualKeyCode::T => {
                        theme_idx += 1;
                        window.request_redraw();
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(size, theme_idx) {
                    error!("redraw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
