use crate::geom::{Pos, Rect, Size};

pub const YES_LEFT_FRAC: f32 = 0.12;
pub const NO_START_LEFT_FRAC: f32 = 0.72;
pub const CARD_PADDING_MIN: f32 = 8.0;

pub fn clamp_to_viewport(pos: Pos, size: Size, viewport: Size, margin: f32) -> Pos {
    let max_left = (viewport.width - size.width - margin).max(margin);
    let max_top = (viewport.height - size.height - margin).max(margin);
    Pos {
        left: pos.left.clamp(margin, max_left),
        top: pos.top.clamp(margin, max_top),
    }
}

/// Affirmative control position relative to its button row: a little in from
/// the left edge, vertically centered.
pub fn yes_position_in_card(card: Size, yes: Size) -> Pos {
    Pos {
        left: (card.width * YES_LEFT_FRAC).floor().max(CARD_PADDING_MIN),
        top: ((card.height - yes.height) * 0.5).floor().max(CARD_PADDING_MIN),
    }
}

/// Starting spot for the evading control: toward the right of the viewport,
/// on the affirmative control's row, pulled into the margins.
pub fn initial_no_position(yes: &Rect, no: Size, viewport: Size, margin: f32) -> Pos {
    let left = (viewport.width * NO_START_LEFT_FRAC)
        .floor()
        .min(viewport.width - no.width - margin)
        .max(margin);
    let top = (yes.top + (yes.height - no.height) * 0.5)
        .floor()
        .min(viewport.height - no.height - margin)
        .max(margin);
    Pos { left, top }
}
