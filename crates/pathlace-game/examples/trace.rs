//! Scripted trace through a small level, printed to stdout.
//!
//! Run with: `cargo run -p pathlace-game --example trace`

use pathlace_core::{Coord, Level};
use pathlace_game::{Session, TrackerStatus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = Level::from_text(
        "\
S..#.
.#.#.
.#.#.
.#...
.#.#G",
    )?;
    let mut session = Session::load(&level)?;

    println!("optimal steps: {:?}", session.state().optimal_steps);
    session.toggle_hint();

    // Drag from the start cell down the left edge won't work (walls), so
    // follow the corridor the solver found.
    session.pointer_down(session.grid().start());
    if let Some(optimal) = session.optimal_path().map(Clone::clone) {
        for cell in optimal.iter().skip(1) {
            session.pointer_move(cell);
        }
    }
    session.pointer_up();

    render(&session);

    let state = session.state();
    match state.status {
        TrackerStatus::Won => println!(
            "won in {} steps (optimal {})",
            state.steps,
            state.optimal_steps.unwrap_or(0)
        ),
        status => println!("status: {status:?}, steps so far: {}", state.steps),
    }
    Ok(())
}

fn render(session: &Session) {
    let grid = session.grid();
    let trail = session.player_path();
    for row in 0..grid.rows() {
        let mut line = String::new();
        for col in 0..grid.cols() {
            let c = Coord::new(row, col);
            let kind = grid.kind(c).expect("in bounds");
            let glyph = if trail.contains(c) && kind.is_walkable() {
                'o'
            } else if session.hint_visible()
                && session.optimal_path().is_some_and(|p| p.contains(c))
            {
                '*'
            } else {
                kind.glyph()
            };
            line.push(glyph);
        }
        println!("{line}");
    }
}
