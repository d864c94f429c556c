//! Fixed-width Unicode block progress bar.

const FILLED: char = '█';
const EMPTY: char = '░';

/// Render `width` cells for `percent` (0.0..=100.0), prefixed with one space
/// so the bar separates from the text it is appended to.
pub fn draw_progress(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0 * width as f64) as usize).min(width);

    let mut bar = String::with_capacity(1 + width * FILLED.len_utf8());
    bar.push(' ');
    for _ in 0..filled {
        bar.push(FILLED);
    }
    for _ in filled..width {
        bar.push(EMPTY);
    }
    bar
}
