use rpncalc::display::format_panels;
use rpncalc::{Engine, Registry};

/// Evaluate one line, mapping errors to display strings
pub(crate) fn execute_line(engine: &mut Engine, input: &str) -> Result<(), String> {
    engine.evaluate_batch(input).map_err(|e| e.to_string())
}

/// Live stack on the left, undo snapshot on the right
pub(crate) fn render_stacks(engine: &Engine) -> String {
    format_panels(
        engine.current_stack(),
        engine.previous_stack(),
        terminal_width(),
    )
}

/// One line per operation: label, aliases, description
pub(crate) fn format_catalog(registry: &Registry) -> String {
    let mut out = String::new();
    for op in registry.operations() {
        let mut names = vec![op.label];
        names.extend(registry.aliases_of(op.label));
        out.push_str(&format!("    {:<16}{}\n", names.join(" "), op.description));
    }
    out.push_str(&format!(
        "    {:<16}restores the stack before the last line\n",
        rpncalc::UNDO
    ));
    out
}

/// Get terminal width, defaulting to 80
pub(crate) fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}
