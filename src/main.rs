mod ui;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lakeside::build_info;
use lakeside::config::{help_text, parse_args, CliCommand};
use lakeside::core::constants::{
    AUTOSAVE_INTERVAL_MS, MSG_DEFAULT_MS, MSG_WELCOME_MS, REALTIME_FRAME_MS,
};
use lakeside::core::{
    cancel_fishing, close_shop, game_tick, handle_action, shop_buy, shop_sell_all,
    shop_upgrade_rod, try_open_shop, GameState, TickEvent,
};
use lakeside::input::{GameKey, KeyboardState};
use lakeside::save_manager::SaveManager;
use lakeside::shop::ShopItem;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use ui::shop_modal::{ITEM_KEYS, SELL_KEY, UPGRADE_KEY};
use ui::{draw_ui, UiFlags};

/// How long the tension bar flashes after a haptic pulse.
const HAPTIC_FLASH_MS: u64 = 120;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let config = match parse_args(&args) {
        Ok(CliCommand::Play(config)) => config,
        Ok(CliCommand::Help) => {
            println!("{}", help_text());
            return Ok(());
        }
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'lakeside --help' for usage.");
            std::process::exit(2);
        }
    };

    // stderr shares the terminal with the UI, so logging is opt-in
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let save_manager = match config.save_path {
        Some(path) => SaveManager::with_path(path),
        None => SaveManager::new().map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?,
    };

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut state = save_manager.load_or_default().into_state(&mut rng);
    state.notifications.push(
        "Welcome to the lake! Walk to the water and press SPACE to cast",
        MSG_WELCOME_MS,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    // Release events let holding SPACE work exactly; without them the
    // hold tracker falls back to the key-repeat stream.
    let enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut state, &save_manager, &mut rng);
    save_game(&save_manager, &mut state);

    // Restore terminal
    if enhanced {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exited");
    result
}

/// Writes the save, surfacing failures on the notification line.
fn save_game(save_manager: &SaveManager, state: &mut GameState) {
    if let Err(e) = save_manager.save(state) {
        warn!("save failed: {}", e);
        state
            .notifications
            .push(format!("Could not save: {}", e), MSG_DEFAULT_MS);
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Keys while the shop is open. Returns the events from any transaction.
fn handle_shop_key(state: &mut GameState, code: KeyCode) -> Vec<TickEvent> {
    match code {
        KeyCode::Esc | KeyCode::Char('e') | KeyCode::Char('E') => close_shop(state),
        KeyCode::Char(c) if c == UPGRADE_KEY => shop_upgrade_rod(state),
        KeyCode::Char(c) if c.to_ascii_lowercase() == SELL_KEY => shop_sell_all(state),
        KeyCode::Char(c) => match ITEM_KEYS.iter().position(|&k| k == c) {
            Some(idx) => shop_buy(state, ShopItem::ALL[idx]),
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut GameState,
    save_manager: &SaveManager,
    rng: &mut ChaCha8Rng,
) -> io::Result<()> {
    let frame_interval = Duration::from_millis(REALTIME_FRAME_MS);
    let started = Instant::now();
    let mut last_frame = Instant::now();
    let mut last_autosave = Instant::now();
    let mut flash_until: Option<Instant> = None;
    let mut keyboard = KeyboardState::default();

    loop {
        let flags = UiFlags {
            haptic_flash: flash_until.is_some_and(|t| Instant::now() < t),
        };
        terminal.draw(|frame| draw_ui(frame, state, flags))?;

        let mut events = Vec::new();

        // Drain input until the next frame is due
        let deadline = last_frame + frame_interval;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let now_ms = started.elapsed().as_millis() as u64;
            let is_press = key.kind != KeyEventKind::Release;

            if is_press && is_quit(&key) {
                return Ok(());
            }

            if state.shop_open {
                if key.kind == KeyEventKind::Press {
                    events.extend(handle_shop_key(state, key.code));
                }
                continue;
            }

            match key.code {
                KeyCode::Esc if is_press => events.extend(cancel_fishing(state)),
                KeyCode::Char('e') | KeyCode::Char('E') if key.kind == KeyEventKind::Press => {
                    events.extend(try_open_shop(state))
                }
                _ => {
                    if let Some((GameKey::Action, true)) = keyboard.handle(&key, now_ms) {
                        events.extend(handle_action(state));
                    }
                }
            }
        }

        // Advance the game; game_tick clamps long frames itself
        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;
        let input = keyboard.snapshot(started.elapsed().as_millis() as u64);
        events.extend(game_tick(state, &input, dt_ms, rng));

        let mut save_now = false;
        for event in &events {
            match event {
                TickEvent::HapticPulse { .. } => {
                    flash_until = Some(now + Duration::from_millis(HAPTIC_FLASH_MS));
                }
                // Bars are gone; drop any flash still pending from the last pulse
                TickEvent::FishingCleared => flash_until = None,
                TickEvent::ShopOpened => keyboard.clear(),
                TickEvent::SaveRequested => save_now = true,
                _ => {}
            }
        }

        if save_now || last_autosave.elapsed() >= Duration::from_millis(AUTOSAVE_INTERVAL_MS) {
            save_game(save_manager, state);
            last_autosave = Instant::now();
        }
    }
}
