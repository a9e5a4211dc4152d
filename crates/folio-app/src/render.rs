//! Full-screen redraw of the terminal window.
//!
//! Row 0 is the title bar, the last row is the prompt line, and everything in
//! between shows the tail of the scrollback. While matrix mode is on the rain
//! is painted into the body first and the scrollback is drawn over it.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use folio_terminal::{InputController, RainFrame};

const TITLE_FG: Color = Color::Rgb {
    r: 0x8b,
    g: 0x94,
    b: 0x9e,
};
const TEXT_FG: Color = Color::Rgb {
    r: 0xe0,
    g: 0xe0,
    b: 0xe8,
};
const PROMPT_FG: Color = Color::Rgb {
    r: 0x00,
    g: 0xd4,
    b: 0xff,
};
const HINT_FG: Color = Color::DarkGrey;

/// The last `rows` lines of the scrollback.
pub fn visible_tail(buffer: &[String], rows: usize) -> &[String] {
    &buffer[buffer.len().saturating_sub(rows)..]
}

/// Rain green scaled by cell intensity.
pub fn rain_color(intensity: u8) -> Color {
    let scale = |full: u8| (u16::from(full) * u16::from(intensity) / 255) as u8;
    Color::Rgb {
        r: 0,
        g: scale(0xff),
        b: scale(0x41),
    }
}

pub fn draw(out: &mut impl Write, controller: &InputController, size: (u16, u16)) -> io::Result<()> {
    let (width, height) = size;
    if height < 2 {
        return Ok(());
    }
    let session = controller.session();
    let body_rows = height - 2;

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        SetForegroundColor(TITLE_FG),
        SetAttribute(Attribute::Bold),
        Print(session.title()),
        SetAttribute(Attribute::Reset),
    )?;

    if controller.overlay().is_active() {
        draw_rain(out, &controller.overlay().frame(), width, body_rows)?;
    }

    let text_fg = if session.matrix_mode() {
        rain_color(u8::MAX)
    } else {
        TEXT_FG
    };
    let prompt = session.prompt();
    for (i, line) in visible_tail(session.buffer(), usize::from(body_rows))
        .iter()
        .enumerate()
    {
        queue!(out, MoveTo(0, 1 + i as u16))?;
        match prompt.strip(line) {
            Some(command) => queue!(
                out,
                SetForegroundColor(PROMPT_FG),
                Print(prompt.prefix()),
                SetForegroundColor(text_fg),
                Print(command),
            )?,
            None => queue!(out, SetForegroundColor(text_fg), Print(line))?,
        }
    }

    queue!(
        out,
        MoveTo(0, height - 1),
        SetForegroundColor(PROMPT_FG),
        Print(prompt.prefix()),
        SetForegroundColor(text_fg),
        Print(controller.draft().text()),
    )?;
    if let Some(hint) = controller.draft().hint() {
        queue!(out, SetForegroundColor(HINT_FG), Print(hint))?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}

/// Rain columns are two cells wide to fit full-width glyphs.
fn draw_rain(out: &mut impl Write, frame: &RainFrame, width: u16, body_rows: u16) -> io::Result<()> {
    for (column, row, cell) in frame.lit() {
        let x = column.saturating_mul(2);
        if x.saturating_add(1) >= width || row >= body_rows {
            continue;
        }
        queue!(
            out,
            MoveTo(x, 1 + row),
            SetForegroundColor(rain_color(cell.intensity)),
            Print(cell.glyph),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_terminal::MatrixRain;
    use folio_types::config::{MatrixConfig, TerminalConfig};
    use folio_types::rng::SimpleRng;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn tail_keeps_newest_lines() {
        let buf = lines(10);
        let tail = visible_tail(&buf, 3);
        assert_eq!(tail, &["line 7", "line 8", "line 9"]);
        assert_eq!(visible_tail(&buf, 50).len(), 10);
        assert!(visible_tail(&buf, 0).is_empty());
    }

    #[test]
    fn rain_color_scales_green() {
        assert_eq!(rain_color(0), Color::Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            rain_color(255),
            Color::Rgb {
                r: 0,
                g: 0xff,
                b: 0x41
            }
        );
    }

    #[test]
    fn draw_writes_prompt_and_title() {
        let mut config = TerminalConfig::default();
        config.matrix.animate = false;
        let mut controller = InputController::desktop(&config);
        controller.on_character_input("he");
        let mut out = Vec::new();
        draw(&mut out, &controller, (80, 24)).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("visitor@ramraghav-portfolio ~ bash"));
        assert!(text.contains("visitor@ram:~$ "));
        assert!(text.contains("lp"));
    }

    #[test]
    fn rain_wider_than_window_is_clipped() {
        let matrix = MatrixConfig {
            columns: u16::MAX,
            rows: 2,
            ..MatrixConfig::default()
        };
        let mut rain = MatrixRain::new(&matrix, SimpleRng::new(4));
        rain.tick();
        let mut out = Vec::new();
        draw_rain(&mut out, rain.frame(), 80, 5).unwrap();
        // Every lit cell sits on screen row 2; columns 0..=39 fit in 80 cells.
        let moves = String::from_utf8_lossy(&out).matches("\x1b[2;").count();
        assert_eq!(moves, 40);
    }

    #[test]
    fn tiny_window_draws_nothing() {
        let controller = InputController::desktop(&TerminalConfig::default());
        let mut out = Vec::new();
        draw(&mut out, &controller, (80, 1)).unwrap();
        assert!(out.is_empty());
    }
}
