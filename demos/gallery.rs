//! Bubble gallery — renders a handful of speech bubbles as one SVG document.
//!
//! Usage:
//! ```text
//! cargo run --example gallery > gallery.svg
//! RUST_LOG=bubble_path=debug cargo run --example gallery > gallery.svg
//! ```

use bubble_path::{CaretEdge, InsettableShape, MakeBubble, Point2, Rect, Shape, ShapeConfig};
use tracing::info;

/// Border width of the stroked outline drawn inside the first bubble.
const BORDER: f64 = 3.0;

struct Tile {
    label: &'static str,
    fill: &'static str,
    rect: Rect,
    config: ShapeConfig,
}

fn tiles() -> Vec<Tile> {
    let wide = |row: f64| {
        Rect::from_origin_size(Point2::new(40.0, 40.0 + row * 200.0), 300.0, 150.0)
    };
    let narrow = |col: f64| {
        Rect::from_origin_size(Point2::new(40.0 + col * 160.0, 640.0), 140.0, 150.0)
    };

    vec![
        Tile {
            label: "Normalized: 0.5",
            fill: "#2f6fde",
            rect: wide(0.0),
            config: ShapeConfig::normalized(16.0, 24.0, 6.0, 0.5, CaretEdge::Top),
        },
        Tile {
            label: "Inset from left: 50px",
            fill: "#2e9d4f",
            rect: wide(1.0),
            config: ShapeConfig::inset_from_start_rect(
                16.0,
                24.0,
                12.0,
                6.0,
                50.0,
                CaretEdge::Bottom,
            ),
        },
        Tile {
            label: "Inset from right: 50px",
            fill: "#e8871e",
            rect: wide(2.0),
            config: ShapeConfig::inset_from_end(16.0, 24.0, 6.0, 50.0, CaretEdge::Bottom),
        },
        Tile {
            label: "From top: 30px",
            fill: "#8a4fc7",
            rect: narrow(0.0),
            config: ShapeConfig::inset_from_start(16.0, 24.0, 6.0, 30.0, CaretEdge::Left),
        },
        Tile {
            label: "From bottom: 30px",
            fill: "#d33a3a",
            rect: narrow(1.0),
            config: ShapeConfig::inset_from_end(16.0, 24.0, 6.0, 30.0, CaretEdge::Right),
        },
    ]
}

fn main() {
    // Default: WARN for everything, INFO for the gallery and the library.
    // Override with RUST_LOG (e.g. RUST_LOG=bubble_path=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("gallery=info".parse().unwrap_or_default())
        .add_directive("bubble_path=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut body = String::new();
    for (i, tile) in tiles().iter().enumerate() {
        let outline = MakeBubble::new(tile.rect, tile.config).execute();
        info!(
            tile = tile.label,
            honored = outline.caret.is_honored(),
            commands = outline.path.len(),
            "traced bubble"
        );

        body.push_str(&format!(
            "  <path d=\"{}\" fill=\"{}\"/>\n",
            outline.path.to_svg_path_data(),
            tile.fill
        ));

        // A border stroked inside the fill bounds: half the width inward.
        if i == 0 {
            let border = tile.config.inset(BORDER / 2.0).path(&tile.rect);
            body.push_str(&format!(
                "  <path d=\"{border}\" fill=\"none\" stroke=\"white\" stroke-width=\"{BORDER}\"/>\n"
            ));
        }

        let center = tile.rect.center();
        body.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" fill=\"white\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"13\">{}</text>\n",
            center.x, center.y, tile.label
        ));
    }

    println!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"380\" height=\"830\" viewBox=\"0 0 380 830\">\n{body}</svg>"
    );
}
