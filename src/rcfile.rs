use rpncalc::Engine;
use crate::terminal::execute_line;
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Get home directory
pub(crate) fn dirs_home() -> Option<std::path::PathBuf> {
    env::var_os("HOME").map(std::path::PathBuf::from)
}

/// Evaluate ~/.rpncalcrc if it exists
pub(crate) fn load_rpncalcrc(engine: &mut Engine) {
    let Some(home) = dirs_home() else {
        return;
    };
    load_rc_file(engine, &home.join(".rpncalcrc"));
}

pub(crate) fn load_rc_file(engine: &mut Engine, path: &Path) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };
    debug!(path = %path.display(), "loading rc file");
    load_rc_content(engine, &content, &path.display().to_string());
}

/// Run each line; blank lines and `#` comments are skipped, failures are
/// logged and do not stop the rest of the file. The preloaded stack is not
/// undoable.
pub(crate) fn load_rc_content(engine: &mut Engine, content: &str, source: &str) {
    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Err(e) = execute_line(engine, trimmed) {
            warn!("{} line {}: {}", source, line_num + 1, e);
        }
    }
    engine.discard_snapshot();
}
