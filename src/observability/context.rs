//! Thread-local context for crash reports.
//!
//! Records the generation phase and the file being extracted. Context is per
//! thread, so it works inside rayon workers; progress counters are global.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static FILES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static FILES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<GenerationContext> = const { RefCell::new(GenerationContext::new()) };
}

/// What bddgen was doing on this thread
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    pub phase: Option<GenerationPhase>,
    pub current_file: Option<PathBuf>,
}

impl GenerationContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    FileDiscovery,
    Extraction,
    Writing,
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileDiscovery => write!(f, "file_discovery"),
            Self::Extraction => write!(f, "extraction"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

/// Restores the previous context on drop
pub struct ContextGuard {
    previous: GenerationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

#[must_use]
pub fn set_phase(phase: GenerationPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_current_file(path: &Path) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_file = Some(path.to_path_buf());
        ContextGuard { previous }
    })
}

pub fn get_current_context() -> GenerationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

pub fn set_progress(processed: usize, total: usize) {
    FILES_PROCESSED.store(processed, Ordering::Relaxed);
    FILES_TOTAL.store(total, Ordering::Relaxed);
}

pub fn increment_processed() {
    FILES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

/// `(processed, total)`
pub fn get_progress() -> (usize, usize) {
    (
        FILES_PROCESSED.load(Ordering::Relaxed),
        FILES_TOTAL.load(Ordering::Relaxed),
    )
}
