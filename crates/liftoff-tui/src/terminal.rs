//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use liftoff_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enable mouse capture so wheel events reach the list
pub fn enable_mouse_capture() -> Result<()> {
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;
    Ok(())
}

/// Disable mouse capture (before restoring the terminal)
pub fn disable_mouse_capture() -> Result<()> {
    crossterm::execute!(std::io::stdout(), DisableMouseCapture)?;
    Ok(())
}
