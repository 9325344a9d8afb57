use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::{Mutex, const_mutex};

use crate::parse::ParseOptions;
use crate::{NodeRef, ReadableRules, ReadableRulesNode};

/// Lifecycle of a [`ReadableRulesChecker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    /// No initialization has been attempted.
    Uninitialized,
    /// A `check_init` call is parsing a document.
    Initializing,
    /// The last attempt was rejected; a later `check_init` retries.
    FailedInit,
    /// A document was accepted. Final.
    Initialized,
}

/// Holds the process's rule document once one is accepted.
///
/// Initialization happens at most once; concurrent callers of
/// [`check_init`](Self::check_init) are serialized and the losers observe the
/// winner's document. Queries before a successful initialization fall back to
/// fixed answers (`false`, or `true` for [`is_available`](Self::is_available)).
#[derive(Debug)]
pub struct ReadableRulesChecker {
    options: ParseOptions,
    checked: AtomicBool,
    failed: AtomicBool,
    pending: AtomicUsize,
    init_lock: Mutex<()>,
    rules: OnceLock<ReadableRules>,
}

static GLOBAL: ReadableRulesChecker = ReadableRulesChecker::new();

/// The process-wide checker.
#[must_use]
pub fn global() -> &'static ReadableRulesChecker {
    &GLOBAL
}

impl Default for ReadableRulesChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadableRulesChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_options(ParseOptions::new())
    }

    #[must_use]
    pub const fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            checked: AtomicBool::new(false),
            failed: AtomicBool::new(false),
            pending: AtomicUsize::new(0),
            init_lock: const_mutex(()),
            rules: OnceLock::new(),
        }
    }

    /// Parse `json` and install it unless a document is already installed.
    ///
    /// Returns whether the checker is initialized afterwards. A rejected
    /// document leaves the checker untouched and may be retried.
    pub fn check_init(&self, json: &str) -> bool {
        self.checked.store(true, Ordering::Release);
        if self.rules.get().is_some() {
            return true;
        }

        self.pending.fetch_add(1, Ordering::SeqCst);
        let inited = self.init_locked(json);
        self.pending.fetch_sub(1, Ordering::SeqCst);
        inited
    }

    fn init_locked(&self, json: &str) -> bool {
        let _guard = self.init_lock.lock();
        if self.rules.get().is_some() {
            return true;
        }

        match ReadableRules::from_json_with(json, &self.options) {
            Ok(rules) => {
                tracing::info!(
                    rules = rules.rules().len(),
                    custom_props = rules.custom_props().len(),
                    "readable rules initialized"
                );
                // Only the lock holder sets the cell.
                let _ = self.rules.set(rules);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "readable rules rejected");
                self.failed.store(true, Ordering::SeqCst);
                false
            }
        }
    }

    #[must_use]
    pub fn is_inited(&self) -> bool {
        self.rules.get().is_some()
    }

    /// Whether `check_init` has ever been called.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn state(&self) -> InitState {
        if self.is_inited() {
            InitState::Initialized
        } else if self.pending.load(Ordering::SeqCst) > 0 {
            InitState::Initializing
        } else if self.failed.load(Ordering::SeqCst) {
            InitState::FailedInit
        } else {
            InitState::Uninitialized
        }
    }

    #[must_use]
    pub fn rules(&self) -> Option<&ReadableRules> {
        self.rules.get()
    }

    #[must_use]
    pub fn is_readable(&self, node: &NodeRef) -> bool {
        self.rules().is_some_and(|r| r.is_readable(node))
    }

    #[must_use]
    pub fn is_root_type(&self, node: &dyn ReadableRulesNode) -> bool {
        self.rules().is_some_and(|r| r.is_root_type(node))
    }

    #[must_use]
    pub fn is_scroll_ignore_types(&self, node: &dyn ReadableRulesNode) -> bool {
        self.rules().is_some_and(|r| r.is_scroll_ignore_types(node))
    }

    #[must_use]
    pub fn is_scrollable_types(&self, node: &dyn ReadableRulesNode) -> bool {
        self.rules().is_some_and(|r| r.is_scrollable_types(node))
    }

    #[must_use]
    pub fn is_available(&self, node: &NodeRef) -> bool {
        self.rules().is_none_or(|r| r.is_available(node))
    }
}
