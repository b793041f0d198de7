//! Panic hook printing a crash report with the file being extracted.

use super::context::{get_current_context, get_progress, GenerationContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 78;

/// Install early in `main`, before any extraction starts
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let (processed, total) = get_progress();

    eprintln!();
    eprintln!("{}", rule('═'));
    eprintln!("BDDGEN CRASH REPORT");
    eprintln!("{}", rule('─'));
    eprintln!("Version:  {VERSION}");
    eprintln!("Platform: {}", std::env::consts::OS);
    eprintln!("Time:     {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    eprintln!("Panic:    {}", truncate(&extract_panic_message(info), WIDTH - 10));
    if let Some(location) = info.location() {
        eprintln!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    eprintln!("{}", rule('─'));
    print_context(&context, processed, total);
    eprintln!("{}", rule('─'));

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
    eprintln!("{}", rule('═'));
}

fn print_context(context: &GenerationContext, processed: usize, total: usize) {
    match &context.phase {
        Some(phase) => eprintln!("Phase:    {phase}"),
        None => eprintln!("Phase:    (not set)"),
    }
    if let Some(file) = &context.current_file {
        eprintln!("File:     {}", truncate(&file.display().to_string(), WIDTH - 10));
    }
    if total > 0 {
        eprintln!("Progress: {processed} / {total} files");
    }
}

fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(WIDTH).collect()
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("ñandú ñandú", 8), "ñandú...");
    }

    #[test]
    fn test_rule_width() {
        assert_eq!(rule('─').chars().count(), WIDTH);
    }
}
