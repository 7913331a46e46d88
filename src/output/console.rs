//! Console echo of the top-K lists

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::size::format_size;
use crate::tree::{RankedItem, TopK};

use super::utils::{top_dirs_header, top_files_header};

/// Print both top-K lists to stdout with optional color.
pub fn print_top_lists(
    top: &TopK,
    top_files: usize,
    top_dirs: usize,
    use_color: bool,
) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    write_ranked_list(&mut stdout, &top_files_header(top_files), &top.files)?;
    writeln!(stdout)?;
    write_ranked_list(&mut stdout, &top_dirs_header(top_dirs), &top.dirs)?;
    Ok(())
}

/// Write a header and its ranked entries. Same text as the report, plus color.
pub fn write_ranked_list<W: WriteColor>(
    out: &mut W,
    header: &str,
    items: &[RankedItem],
) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    let mut path_color = ColorSpec::new();
    path_color.set_fg(Some(Color::Cyan));
    let mut size_color = ColorSpec::new();
    size_color.set_fg(Some(Color::Yellow)).set_bold(true);

    out.set_color(&bold)?;
    writeln!(out, "{}", header)?;
    out.reset()?;

    for (i, item) in items.iter().enumerate() {
        write!(out, "{}. ", i + 1)?;
        out.set_color(&path_color)?;
        write!(out, "{}", item.path.display())?;
        out.reset()?;
        write!(out, " - ")?;
        out.set_color(&size_color)?;
        write!(out, "{}", format_size(item.size))?;
        out.reset()?;
        writeln!(out)?;
    }

    Ok(())
}
