use std::io::{self, Write};

use psych_core::models::route::Route;
use psych_settings::Theme;

use crate::render::Palette;

pub fn write_theme(palette: &Palette, theme: Theme, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", palette.heading(Route::Settings.heading()))?;
    let label = match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    };
    writeln!(out, "Theme: {}", palette.accent(label))
}
