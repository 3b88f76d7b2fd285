//! Rendering of install listings for user-facing diagnostics.

use std::io::{self, Write};

use crate::engine::install::EngineInstall;

/// Write one `name -> path` line per install, in list order.
pub fn write_install_listing(out: &mut impl Write, installs: &[EngineInstall]) -> io::Result<()> {
    for install in installs {
        writeln!(out, "  {} -> {}", install.name, install.path.display())?;
    }
    Ok(())
}

/// In-memory rendering of [`write_install_listing`].
pub fn render_install_listing(installs: &[EngineInstall]) -> String {
    let mut buffer = Vec::new();
    write_install_listing(&mut buffer, installs).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("listing is valid UTF-8")
}
