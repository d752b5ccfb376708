//! Lay out a straight-clothoid-arc transition and print the replayed calls.
//!
//! Run with: cargo run --example spiral --features tracing

use grapher::sketch::ArcOp;
use grapher::{Clothoid, ClothoidPath, Rgba, Sketch, Surface, Turn, Vector, v};

/// Prints each surface call on its own line.
struct Printer;

impl Surface for Printer {
    fn begin_path(&mut self) {
        println!("beginPath()");
    }

    fn move_to(&mut self, pos: Vector) {
        println!("  moveTo({:.3}, {:.3})", pos.x, pos.y);
    }

    fn line_to(&mut self, pos: Vector) {
        println!("  lineTo({:.3}, {:.3})", pos.x, pos.y);
    }

    fn arc(&mut self, arc: &ArcOp) {
        println!(
            "  arc({:.3}, {:.3}, {:.3}, {:.4}, {:.4}, {})",
            arc.center.x,
            arc.center.y,
            arc.radius,
            arc.start_angle,
            arc.end_angle,
            arc.anticlockwise
        );
    }

    fn stroke(&mut self, color: Option<&Rgba>) {
        match color {
            Some(c) => println!("stroke({c})"),
            None => println!("stroke()"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let final_angle: f64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0.6);
    let radius = 80.0;

    let start = v(20.0, 200.0);
    let entry = v(120.0, 200.0);
    // y points down on screen, so a right turn in math terms bends upward
    let spiral = ClothoidPath::new(entry, Clothoid::new(final_angle, radius))
        .turning(Turn::Right);
    let end = spiral.clothoid.end_point();

    let mut sketch = Sketch::new();
    sketch.line(start, entry);
    sketch.clothoid(&spiral);
    sketch.circle(spiral.place(end), 3.0);
    sketch.y_of_x_colored(v(20.0, 320.0), v(40.0, 40.0), 3.0, f64::sin);

    sketch.draw(&mut Printer);
}
