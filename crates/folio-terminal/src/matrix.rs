//! Matrix rain overlay.
//!
//! [`MatrixRain`] is a pure grid model: every tick the whole grid fades a
//! step, each column paints one random glyph at its drop position, and drops
//! that have fallen past the bottom restart at the top with a small chance.
//! [`MatrixOverlay`] runs that model on a background thread while matrix mode
//! is on and publishes the latest [`RainFrame`] for the renderer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use folio_types::config::MatrixConfig;
use folio_types::rng::SimpleRng;

/// Katakana, digits and hex letters.
const GLYPHS: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン0123456789ABCDEF";

/// Brightness of a freshly painted glyph.
pub const HEAD_INTENSITY: u8 = u8::MAX;

/// Brightness lost per tick.
const FADE_STEP: u8 = 21;

/// One grid cell. `intensity == 0` means blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainCell {
    pub glyph: char,
    pub intensity: u8,
}

impl RainCell {
    const BLANK: Self = Self {
        glyph: ' ',
        intensity: 0,
    };

    pub fn is_lit(&self) -> bool {
        self.intensity > 0
    }
}

/// Row-major snapshot of the rain grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainFrame {
    columns: u16,
    rows: u16,
    cells: Vec<RainCell>,
}

impl RainFrame {
    pub fn blank(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![RainCell::BLANK; usize::from(columns) * usize::from(rows)],
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, column: u16, row: u16) -> Option<RainCell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(self.index(column, row)).copied()
    }

    /// Lit cells as `(column, row, cell)`.
    pub fn lit(&self) -> impl Iterator<Item = (u16, u16, RainCell)> + '_ {
        let columns = usize::from(self.columns.max(1));
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.is_lit()
                .then(|| ((i % columns) as u16, (i / columns) as u16, *c))
        })
    }

    fn index(&self, column: u16, row: u16) -> usize {
        usize::from(row) * usize::from(self.columns) + usize::from(column)
    }
}

/// The rain simulation.
#[derive(Debug, Clone)]
pub struct MatrixRain {
    frame: RainFrame,
    drops: Vec<u16>,
    glyphs: Vec<char>,
    reset_chance: f32,
    rng: SimpleRng,
}

impl MatrixRain {
    pub fn new(config: &MatrixConfig, rng: SimpleRng) -> Self {
        Self {
            frame: RainFrame::blank(config.columns, config.rows),
            drops: vec![0; usize::from(config.columns)],
            glyphs: GLYPHS.chars().collect(),
            reset_chance: config.reset_chance,
            rng,
        }
    }

    pub fn frame(&self) -> &RainFrame {
        &self.frame
    }

    /// Current drop row per column.
    pub fn drops(&self) -> &[u16] {
        &self.drops
    }

    /// Advance one animation step.
    pub fn tick(&mut self) {
        for cell in &mut self.frame.cells {
            cell.intensity = cell.intensity.saturating_sub(FADE_STEP);
        }
        let rows = self.frame.rows;
        for column in 0..self.drops.len() {
            let glyph = self.glyphs[self.rng.next_index(self.glyphs.len())];
            let row = self.drops[column];
            if row < rows {
                let idx = self.frame.index(column as u16, row);
                self.frame.cells[idx] = RainCell {
                    glyph,
                    intensity: HEAD_INTENSITY,
                };
            } else if self.rng.next_f32() < self.reset_chance {
                self.drops[column] = 0;
                continue;
            }
            self.drops[column] = row.saturating_add(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

struct RainTicker {
    stop: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

/// Background ticker that drives a [`MatrixRain`] while matrix mode is on.
pub struct MatrixOverlay {
    config: MatrixConfig,
    seed: u64,
    active: bool,
    frame: Arc<Mutex<RainFrame>>,
    ticks: Arc<AtomicU64>,
    ticker: Option<RainTicker>,
}

impl MatrixOverlay {
    pub fn new(config: &MatrixConfig, seed: u64) -> Self {
        Self {
            config: config.clone(),
            seed,
            active: false,
            frame: Arc::new(Mutex::new(RainFrame::blank(config.columns, config.rows))),
            ticks: Arc::new(AtomicU64::new(0)),
            ticker: None,
        }
    }

    /// Whether the overlay has been started and not stopped.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a ticker thread is currently attached.
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Number of ticks published since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Latest published frame.
    pub fn frame(&self) -> RainFrame {
        match self.frame.lock() {
            Ok(frame) => frame.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Start a fresh rain. No-op when already active.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.publish(RainFrame::blank(self.config.columns, self.config.rows));
        if !self.config.animate {
            log::info!("matrix overlay active (animation disabled)");
            return;
        }

        // A new seed per start so each activation rains differently.
        self.seed = SimpleRng::new(self.seed).next_u64();
        let mut rain = MatrixRain::new(&self.config, SimpleRng::new(self.seed));
        let frame = Arc::clone(&self.frame);
        let ticks = Arc::clone(&self.ticks);
        let interval = Duration::from_millis(self.config.tick_ms);
        let (stop, stop_rx) = mpsc::channel::<()>();

        let handle = std::thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        rain.tick();
                        match frame.lock() {
                            Ok(mut f) => *f = rain.frame().clone(),
                            Err(poisoned) => *poisoned.into_inner() = rain.frame().clone(),
                        }
                        ticks.fetch_add(1, Ordering::Relaxed);
                    },
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        log::info!("matrix overlay started ({} ms tick)", self.config.tick_ms);
        self.ticker = Some(RainTicker { stop, handle });
    }

    /// Stop the ticker and blank the frame. No-op when inactive.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(ticker) = self.ticker.take() {
            drop(ticker.stop);
            if ticker.handle.join().is_err() {
                log::warn!("matrix overlay ticker panicked");
            }
            log::info!("matrix overlay stopped after {} ticks", self.ticks());
        }
        self.publish(RainFrame::blank(self.config.columns, self.config.rows));
    }

    fn publish(&self, next: RainFrame) {
        match self.frame.lock() {
            Ok(mut f) => *f = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

impl Drop for MatrixOverlay {
    fn drop(&mut self) {
        self.stop();
    }
}
