use std::io::{self, Write};

use crate::models::DirectoryEntity;

pub const BAR_WIDTH: usize = 20;
pub const BAR_GLYPH: char = '▄';

const UNIT: u64 = 1024;
// A u64 divided by 1024 at most five extra times stays below 1024, so this
// table covers every input.
const UNIT_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Always `BAR_WIDTH` wide, except empty when `max` is zero.
pub fn draw_bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }

    let ratio = (value as f64 + 1.0).log10() / (max as f64 + 1.0).log10();
    let filled = ((ratio * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);

    let mut bar = String::with_capacity(BAR_WIDTH * BAR_GLYPH.len_utf8());
    bar.extend(std::iter::repeat_n(BAR_GLYPH, filled));
    bar.extend(std::iter::repeat_n(' ', BAR_WIDTH - filled));
    bar
}

/// Formats a byte count with binary (1024) steps: `512B`, `1.5KB`, `3.0GB`.
pub fn human_readable(size: u64) -> String {
    if size < UNIT {
        return format!("{size}B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1}{}B", size as f64 / div as f64, UNIT_PREFIXES[exp])
}

pub fn write_report<W: Write>(writer: &mut W, entities: &[DirectoryEntity]) -> io::Result<()> {
    let max = entities.iter().map(|e| e.bytes).max().unwrap_or(0);

    for entity in entities {
        writeln!(
            writer,
            "{} {:<8}\t{}",
            draw_bar(entity.bytes, max),
            human_readable(entity.bytes),
            entity.path.display()
        )?;
    }

    Ok(())
}
