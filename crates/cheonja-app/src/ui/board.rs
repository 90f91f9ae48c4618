use std::sync::Arc;

use cheonja_core::BLOCK_LEN;
use cheonja_game::{GameAction, TileGame};
use eframe::egui::{
    Align2, Color32, CornerRadius, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, Visuals,
};

use crate::action::{Action, ActionRequestQueue};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct TileVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const CORRECT = 0b0000_0010;
        const SOLVED = 0b0000_0100;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardTile {
    pub(crate) glyph: String,
    pub(crate) visual_state: TileVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct BoardViewModel {
    tiles: Vec<BoardTile>,
    enabled: bool,
}

impl BoardViewModel {
    #[must_use]
    pub(crate) fn new(game: &TileGame, highlight_correct: bool) -> Self {
        let solved = game.is_solved();
        let tiles = game
            .tiles()
            .iter()
            .enumerate()
            .map(|(index, tile)| {
                let mut visual_state = TileVisualState::empty();
                if game.selected() == Some(index) {
                    visual_state |= TileVisualState::SELECTED;
                }
                if game.is_correct_at(index) {
                    if highlight_correct {
                        visual_state |= TileVisualState::CORRECT;
                    }
                    if solved {
                        visual_state |= TileVisualState::SOLVED;
                    }
                }
                BoardTile {
                    glyph: tile.glyph.clone(),
                    visual_state,
                }
            })
            .collect();
        Self {
            tiles,
            enabled: game.state().is_running(),
        }
    }
}

#[derive(Debug, Clone)]
struct TilePalette {
    bg_default: Color32,
    bg_selected: Color32,
    bg_correct: Color32,
    bg_solved: Color32,
    border: Color32,
    border_selected: Color32,
    text: Color32,
    text_disabled: Color32,
}

impl TilePalette {
    fn from_visuals(visuals: &Visuals) -> Self {
        let (bg_correct, bg_solved) = if visuals.dark_mode {
            (Color32::from_rgb(0x6b, 0x55, 0x10), Color32::from_rgb(0x1f, 0x5f, 0x2e))
        } else {
            (Color32::from_rgb(0xff, 0xe0, 0x82), Color32::from_rgb(0xa5, 0xd6, 0xa7))
        };
        Self {
            bg_default: visuals.text_edit_bg_color(),
            bg_selected: visuals.selection.bg_fill,
            bg_correct,
            bg_solved,
            border: visuals.widgets.inactive.fg_stroke.color,
            border_selected: visuals.selection.stroke.color,
            text: visuals.strong_text_color(),
            text_disabled: visuals.weak_text_color(),
        }
    }

    fn fill(&self, state: TileVisualState) -> Color32 {
        if state.intersects(TileVisualState::SOLVED) {
            return self.bg_solved;
        }
        if state.intersects(TileVisualState::SELECTED) {
            return self.bg_selected;
        }
        if state.intersects(TileVisualState::CORRECT) {
            return self.bg_correct;
        }
        self.bg_default
    }

    fn border(&self, state: TileVisualState, tile_size: f32) -> Stroke {
        let base = f32::max(tile_size * BORDER_WIDTH_RATIO, 1.0);
        if state.intersects(TileVisualState::SELECTED) {
            Stroke::new(base * SELECTED_BORDER_WIDTH_RATIO, self.border_selected)
        } else {
            Stroke::new(base, self.border)
        }
    }
}

const BORDER_WIDTH_RATIO: f32 = 0.03;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;
const TILE_GAP_RATIO: f32 = 0.08;
const MAX_TILE_SIZE: f32 = 80.0;

/// Width of a full-size board row.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn max_width() -> f32 {
    let columns = BLOCK_LEN as f32;
    columns * MAX_TILE_SIZE + (columns - 1.0) * MAX_TILE_SIZE * TILE_GAP_RATIO
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn show(ui: &mut Ui, vm: &BoardViewModel, action_queue: &mut ActionRequestQueue) {
    let columns = BLOCK_LEN as f32;
    let rows = vm.tiles.len().div_ceil(BLOCK_LEN) as f32;
    let width = ui.available_width();
    let tile_size = f32::min(width / (columns + (columns - 1.0) * TILE_GAP_RATIO), MAX_TILE_SIZE);
    let gap = tile_size * TILE_GAP_RATIO;
    let board_size = Vec2::new(
        columns * tile_size + (columns - 1.0) * gap,
        rows * tile_size + (rows - 1.0).max(0.0) * gap,
    );

    let style = Arc::clone(ui.style());
    let palette = TilePalette::from_visuals(&style.visuals);
    let (rect, _response) = ui.allocate_exact_size(board_size, Sense::hover());
    let painter = ui.painter();

    for (index, tile) in vm.tiles.iter().enumerate() {
        let x = (index % BLOCK_LEN) as f32;
        let y = (index / BLOCK_LEN) as f32;
        let min = rect.min + Vec2::new(x * (tile_size + gap), y * (tile_size + gap));
        let tile_rect = Rect::from_min_size(min, Vec2::splat(tile_size));
        let state = tile.visual_state;

        painter.rect_filled(tile_rect, CornerRadius::same(4), palette.fill(state));
        painter.rect_stroke(
            tile_rect,
            CornerRadius::same(4),
            palette.border(state, tile_size),
            StrokeKind::Inside,
        );
        painter.text(
            tile_rect.center(),
            Align2::CENTER_CENTER,
            &tile.glyph,
            FontId::proportional(tile_size * 0.6),
            if vm.enabled {
                palette.text
            } else {
                palette.text_disabled
            },
        );

        if vm.enabled {
            let response = ui.interact(tile_rect, ui.id().with(("tile", index)), Sense::click());
            if response.clicked() {
                action_queue.request(Action::Game(GameAction::SelectTile(index)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cheonja_generator::{BoardConfig, BoardGenerator, BoardSeed, testing::pool_with_ids};

    use super::*;

    fn game() -> TileGame {
        let pool = pool_with_ids(1..=16);
        let config = BoardConfig::default().with_block_count(2);
        let generated = BoardGenerator::new(&pool)
            .generate_with_seed(&config, BoardSeed::from_phrase("board"))
            .unwrap();
        TileGame::new(generated.board, config)
    }

    fn count(vm: &BoardViewModel, flag: TileVisualState) -> usize {
        vm.tiles
            .iter()
            .filter(|tile| tile.visual_state.contains(flag))
            .count()
    }

    #[test]
    fn test_highlight_follows_setting() {
        let game = game();
        assert_eq!(count(&BoardViewModel::new(&game, false), TileVisualState::CORRECT), 0);
        assert_eq!(count(&BoardViewModel::new(&game, true), TileVisualState::CORRECT), 8);
    }

    #[test]
    fn test_selection_and_enabled_state() {
        let mut game = game();
        game.select_tile(3).unwrap();
        let vm = BoardViewModel::new(&game, false);
        assert!(vm.enabled);
        assert_eq!(vm.tiles[3].visual_state, TileVisualState::SELECTED);

        game.pause_resume().unwrap();
        assert!(!BoardViewModel::new(&game, false).enabled);
    }
}
