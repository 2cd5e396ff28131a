//! Draw a two-series chart onto a recording canvas and dump the commands.
//!
//! Run with `RUST_LOG=radarkit_chart=debug` to see redraw logging.

use radarkit_chart::{ChartOptions, RadarChart, SeriesUpdate};
use radarkit_core::{Appearance, Color, DrawCommand, Event, RecordingCanvas, ThemeColor};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = ChartOptions::new()
        .radius(120.0)
        .num_axes(5)
        .labels(["Speed", "Power", "Range", "Defense", "Attack"]);
    let mut chart = RadarChart::new(RecordingCanvas::new(), options)?;

    chart.add_data("player-1", [80.0, 60.0, 70.0, 50.0, 90.0], None, true)?;
    chart.add_data(
        "player-2",
        [60.0, 80.0, 50.0, 70.0, 60.0],
        Some(ThemeColor::pair(Color::RED, Color::from_hex("#ff8080")?)),
        false,
    )?;
    chart.update_data("player-1", SeriesUpdate::new().values(vec![85.0, 65.0, 75.0, 55.0, 95.0]))?;

    chart.handle_event(&Event::Resize {
        width: 400.0,
        height: 400.0,
    });
    chart.handle_event(&Event::AppearanceChanged(Appearance::Dark));

    for command in chart.canvas().commands() {
        match command {
            DrawCommand::Line { from, to, .. } => {
                println!("line    ({:.1}, {:.1}) -> ({:.1}, {:.1})", from.x, from.y, to.x, to.y);
            }
            DrawCommand::Polygon { points, fill, .. } => {
                println!("polygon {} vertices, filled: {}", points.len(), fill.is_some());
            }
            DrawCommand::Text { content, position, .. } => {
                println!("text    {content:?} at ({:.1}, {:.1})", position.x, position.y);
            }
        }
    }
    println!("{}", serde_json::to_string_pretty(&chart.get_all())?);
    Ok(())
}
