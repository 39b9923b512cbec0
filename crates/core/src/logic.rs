//! Game logic - the jump game behind the opaque ABI.
//!
//! Everything here mutates the [`GameState`] viewed out of the caller's
//! opaque region and reports output exclusively through the [`FrameSink`]
//! capability. No I/O, no clocks, no allocation on the step path.

use core::fmt::Write as _;

use arrayvec::ArrayString;

use crate::font::{glyph_index, FONT_5X5, GLYPH_ADVANCE};
use crate::rng;
use crate::sink::FrameSink;
use crate::state::{self, GameState, Obstacle, MAX_OBSTACLES};
use crate::state::{PHASE_GAME_OVER, PHASE_PLAYING, PHASE_TITLE};
use tui_dotjump_types::{
    COLOR_BLACK, COLOR_RED, COLOR_WHITE, COLOR_YELLOW, SCREEN_HEIGHT, SCREEN_WIDTH,
};

const GRAVITY: f32 = 0.15;
const JUMP_FORCE: f32 = -1.5;
const PLAYER_COLOR: u8 = COLOR_YELLOW;
const OBSTACLE_COLOR: u8 = COLOR_RED;
const BACKGROUND_COLOR: u8 = COLOR_BLACK;
const OBSTACLE_SPEED: f32 = 0.3;
const MIN_OBSTACLE_SPACING: i32 = 12;
const MAX_OBSTACLE_SPACING: i32 = 20;
const OBSTACLE_WIDTH: i32 = 2;
const FIXED_GAP_SIZE: i32 = 7;
const FIXED_GAP_Y: i32 = 9;
const TEXT_SCROLL_SPEED: f32 = 0.5;

/// Frames a press is ignored on the game-over screen, so the tap that
/// ended the run does not immediately restart it.
const GAME_OVER_INPUT_DELAY_FRAMES: u32 = 30;

const INITIAL_RNG_SEED: u32 = 1;

pub use crate::state::state_size;

/// One-time engine initialization.
///
/// Resets the region to the title phase and performs the first render pass
/// through `sink`, so the display is populated before the frame loop starts.
/// Must be called exactly once, before the first [`update_game`].
pub fn init_game(region: &mut [u8], sink: &mut dyn FrameSink) {
    let state = state::view(region);
    *state = bytemuck::Zeroable::zeroed();
    state.rng_state = INITIAL_RNG_SEED;
    to_title(state);

    clear_screen(state);
    let offset = state.text_scroll_offset as i32;
    draw_text(state, "JUMP", offset, 5, COLOR_YELLOW);
    render_screen(state, sink);
}

/// Advance the simulation by one frame.
///
/// `pressed` is the level-triggered input signal sampled by the scheduler.
/// Renders the resulting frame (and any score change) through `sink` before
/// returning.
pub fn update_game(region: &mut [u8], pressed: bool, sink: &mut dyn FrameSink) {
    let state = state::view(region);
    clear_screen(state);

    match state.phase {
        PHASE_TITLE => {
            scroll_text(state, "JUMP".len());
            let offset = state.text_scroll_offset as i32;
            draw_text(state, "JUMP", offset, 5, COLOR_YELLOW);

            if pressed {
                reset_for_playing(state, sink);
                state.phase = PHASE_PLAYING;
            }
        }

        PHASE_PLAYING => {
            state.frame_count += 1;

            // Jump only from the ground band.
            if pressed && state.player_y >= (SCREEN_HEIGHT - 2) as f32 {
                state.player_velocity_y = JUMP_FORCE;
            }
            state.player_velocity_y += GRAVITY;
            state.player_y += state.player_velocity_y;
            if state.player_y >= (SCREEN_HEIGHT - 1) as f32 {
                state.player_y = (SCREEN_HEIGHT - 1) as f32;
                state.player_velocity_y = 0.0;
            }
            if state.player_y < 0.0 {
                state.player_y = 0.0;
                state.player_velocity_y = 0.0;
            }

            update_obstacles(state);

            for i in 0..MAX_OBSTACLES {
                if state.obstacles[i].scored == 0
                    && state.obstacles[i].x + (OBSTACLE_WIDTH as f32) < state.player_x as f32
                {
                    state.score += 1;
                    state.obstacles[i].scored = 1;
                    sink.set_score(state.score);
                }
            }

            if check_collision(state) {
                state.phase = PHASE_GAME_OVER;
                state.text_scroll_offset = SCREEN_WIDTH as f32;
                state.frame_count = 0;
                sink.set_score(state.score);
            } else {
                draw_obstacles(state);
                draw_player(state);
            }
        }

        _ => {
            // Game over: scrolling banner plus the final score, with a short
            // input lockout before a press returns to the title.
            state.frame_count += 1;

            scroll_text(state, "GAME".len());
            let offset = state.text_scroll_offset as i32;
            draw_text(state, "GAME", offset, 2, COLOR_RED);
            draw_text(state, "OVER", offset, 8, COLOR_RED);
            draw_score(state, SCREEN_WIDTH / 2, 10, COLOR_WHITE);

            if pressed && state.frame_count > GAME_OVER_INPUT_DELAY_FRAMES {
                to_title(state);
            }
        }
    }

    render_screen(state, sink);
}

fn to_title(state: &mut GameState) {
    state.phase = PHASE_TITLE;
    state.text_scroll_offset = SCREEN_WIDTH as f32;
}

fn scroll_text(state: &mut GameState, chars: usize) {
    let text_width = (chars as i32) * GLYPH_ADVANCE;
    state.text_scroll_offset -= TEXT_SCROLL_SPEED;
    if state.text_scroll_offset < -(text_width as f32) {
        state.text_scroll_offset = SCREEN_WIDTH as f32;
    }
}

fn clear_screen(state: &mut GameState) {
    state.screen.fill(BACKGROUND_COLOR);
}

fn put_pixel(state: &mut GameState, x: i32, y: i32, color: u8) {
    if x >= 0 && x < SCREEN_WIDTH && y >= 0 && y < SCREEN_HEIGHT {
        state.screen[(y * SCREEN_WIDTH + x) as usize] = color;
    }
}

fn draw_char(state: &mut GameState, c: char, x: i32, y: i32, color: u8) {
    let Some(index) = glyph_index(c) else {
        return;
    };
    for (r, row) in FONT_5X5[index].iter().enumerate() {
        for col in 0..5 {
            if (row >> (4 - col)) & 1 != 0 {
                put_pixel(state, x + col, y + r as i32, color);
            }
        }
    }
}

fn draw_text(state: &mut GameState, text: &str, start_x: i32, start_y: i32, color: u8) {
    let mut x = start_x;
    for c in text.chars() {
        draw_char(state, c, x, start_y, color);
        x += GLYPH_ADVANCE;
    }
}

fn draw_player(state: &mut GameState) {
    let x = state.player_x;
    let y = state.player_y as i32;
    put_pixel(state, x, y, PLAYER_COLOR);
}

fn draw_obstacles(state: &mut GameState) {
    for i in 0..MAX_OBSTACLES {
        let obs = state.obstacles[i];
        let obs_x = obs.x as i32;
        for w in 0..OBSTACLE_WIDTH {
            let x = obs_x + w;
            if x < 0 || x >= SCREEN_WIDTH {
                continue;
            }
            for y in 0..SCREEN_HEIGHT {
                if y > obs.gap_y - obs.gap_size / 2 && y < obs.gap_y + obs.gap_size / 2 {
                    continue;
                }
                state.screen[(y * SCREEN_WIDTH + x) as usize] = OBSTACLE_COLOR;
            }
        }
    }
}

fn draw_score(state: &mut GameState, center_x: i32, y: i32, color: u8) {
    let mut text = ArrayString::<12>::new();
    let _ = write!(text, "{}", state.score);
    let text_width = (text.len() as i32) * GLYPH_ADVANCE - 1;
    let start_x = center_x - text_width / 2;
    draw_text(state, text.as_str(), start_x, y, color);
}

fn spawn_obstacle(obstacle: &mut Obstacle, x: f32) {
    obstacle.x = x;
    obstacle.gap_size = FIXED_GAP_SIZE;
    obstacle.gap_y = FIXED_GAP_Y;
    obstacle.scored = 0;
}

fn update_obstacles(state: &mut GameState) {
    for i in 0..MAX_OBSTACLES {
        state.obstacles[i].x -= OBSTACLE_SPEED;
        if state.obstacles[i].x + (OBSTACLE_WIDTH as f32) < 0.0 {
            let mut max_x = 0.0f32;
            for j in 0..MAX_OBSTACLES {
                if state.obstacles[j].x > max_x {
                    max_x = state.obstacles[j].x;
                }
            }
            let span = (MAX_OBSTACLE_SPACING - MIN_OBSTACLE_SPACING + 1) as u32;
            let spacing = MIN_OBSTACLE_SPACING + rng::next_range(&mut state.rng_state, span) as i32;
            spawn_obstacle(&mut state.obstacles[i], max_x + spacing as f32);
        }
    }
}

fn check_collision(state: &GameState) -> bool {
    let player_y = state.player_y as i32;
    if player_y >= SCREEN_HEIGHT || player_y < 0 {
        return true;
    }
    for obs in state.obstacles.iter() {
        let obs_x_start = obs.x as i32;
        let obs_x_end = obs_x_start + OBSTACLE_WIDTH - 1;
        if state.player_x >= obs_x_start && state.player_x <= obs_x_end {
            let gap_y_start = obs.gap_y - obs.gap_size / 2;
            let gap_y_end = obs.gap_y + obs.gap_size / 2 - 1;
            if player_y < gap_y_start || player_y > gap_y_end {
                return true;
            }
        }
    }
    false
}

fn reset_for_playing(state: &mut GameState, sink: &mut dyn FrameSink) {
    state.score = 0;
    state.frame_count = 0;
    state.player_x = 3;
    state.player_y = SCREEN_HEIGHT as f32 / 2.0;
    state.player_velocity_y = 0.0;
    for i in 0..MAX_OBSTACLES {
        let x = (SCREEN_WIDTH + (i as i32) * (MIN_OBSTACLE_SPACING + 2)) as f32;
        spawn_obstacle(&mut state.obstacles[i], x);
    }
    sink.set_score(state.score);
}

/// Push the whole frame through the sink.
///
/// The engine does not diff; the host renderer owns change detection.
fn render_screen(state: &GameState, sink: &mut dyn FrameSink) {
    for y in 0..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            sink.set_cell(x, y, state.screen[(y * SCREEN_WIDTH + x) as usize]);
        }
    }
}
