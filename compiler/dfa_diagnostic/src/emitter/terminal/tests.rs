use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::warning(ErrorCode::E7001)
        .with_message("cast `y as String` may fail")
        .with_label(Span::new(10, 21), "this cast may fail")
        .with_secondary_label(Span::new(10, 11), "operand `y`")
        .with_note("`y` is not guaranteed to be a `String`")
        .with_suggestion("check the type with `is` first")
}

fn render(emitter_setup: impl FnOnce(Vec<u8>) -> TerminalEmitter<Vec<u8>>) -> String {
    let mut emitter = emitter_setup(Vec::new());
    emitter.emit(&sample_diagnostic());
    emitter.flush();
    String::from_utf8(emitter.writer).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(|out| TerminalEmitter::with_color_mode(out, ColorMode::Never, false));
    assert!(text.starts_with("warning[E7001]: cast `y as String` may fail\n"));
    assert!(text.contains("  --> 10..21: this cast may fail"));
    assert!(text.contains("      10..11: operand `y`"));
    assert!(text.contains("  = note: `y` is not guaranteed"));
    assert!(text.contains("  = help: check the type"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(|out| TerminalEmitter::with_color_mode(out, ColorMode::Always, false));
    assert!(text.contains("\x1b["));
    assert!(text.contains("E7001"));
}

#[test]
fn test_terminal_emitter_with_source_prints_line_col() {
    let source = "let a = 1\nlet b = y as String\n";
    let text = render(|out| {
        TerminalEmitter::with_color_mode(out, ColorMode::Never, false)
            .with_source("main.src", source)
    });
    // Offset 10 is the start of line 2.
    assert!(text.contains("--> main.src:2:1: this cast may fail"), "actual:\n{text}");
}

#[test]
fn test_emit_all() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let diagnostics = vec![
        Diagnostic::warning(ErrorCode::E7001).with_message("problem 1"),
        Diagnostic::warning(ErrorCode::E7002).with_message("problem 2"),
    ];
    emitter.emit_all(&diagnostics);

    let text = String::from_utf8(emitter.writer).unwrap();
    assert!(text.contains("problem 1"));
    assert!(text.contains("problem 2"));
}

#[test]
fn test_emit_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(0, 3);
    emitter.emit_summary(0, 0);

    let text = String::from_utf8(emitter.writer).unwrap();
    assert_eq!(
        text,
        "error: aborting due to 2 previous errors; 1 warning emitted\nwarning: 3 warnings emitted\n"
    );
}

#[test]
fn test_color_mode() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
