//! Drives the overlay without a window: paints into a recording renderer,
//! taps the RIGHT region, drags the pad and prints what would be drawn.
//!
//! Run with `RUST_LOG=dpad_overlay=debug` to see layout and touch logging.

use std::sync::Arc;

use dpad_overlay::prelude::*;
use dpad_overlay::render::DrawCommand;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DPadError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let keys = Arc::new(Signal::<DirectionKeyEvent>::new());
    keys.connect(|event| {
        println!(
            "key {:>2} {:?} ({})",
            event.key.code(),
            event.action,
            event.direction
        );
    });

    let mut dpad = DPadWidget::with_config(DPadConfig::default())?;
    dpad.set_key_target(keys.clone());

    let mut canvas = RecordingRenderer::new();
    dpad.paint(&mut canvas);

    if let Some(target) = dpad.button(Direction::Right).bounding_box() {
        let start = target.center();
        dpad.handle_pointer(PointerEvent::down(start.x, start.y));
        dpad.handle_pointer(PointerEvent::moved(start.x + 40.0, start.y + 25.0));
        dpad.handle_pointer(PointerEvent::up(start.x + 40.0, start.y + 25.0));
    }

    if dpad.take_repaint_request() {
        canvas.clear();
        dpad.paint(&mut canvas);
    }

    for command in canvas.commands() {
        match command {
            DrawCommand::Text { text, origin, .. } => {
                println!("text {text:<6} at ({:.1}, {:.1})", origin.x, origin.y)
            }
            DrawCommand::StrokeRect { rect, .. } => println!(
                "box  ({:.1}, {:.1}) - ({:.1}, {:.1})",
                rect.left(),
                rect.top(),
                rect.right(),
                rect.bottom()
            ),
        }
    }

    Ok(())
}
