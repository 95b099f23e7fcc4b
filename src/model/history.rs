//! Linear undo/redo history of body snapshots

/// Default cap on stored versions
pub const DEFAULT_MAX_VERSIONS: usize = 1000;

/// Ordered body snapshots with a pointer to the active version
///
/// Always holds at least one snapshot. Committing behind the tip discards the
/// redo branch.
#[derive(Debug, Clone)]
pub struct History {
    versions: Vec<String>,
    current: usize,
    max_versions: usize,
}

impl History {
    /// Start a history with `initial` as version 0
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_max_versions(initial, DEFAULT_MAX_VERSIONS)
    }

    /// Start a history that keeps at most `max_versions` snapshots
    ///
    /// A cap below 1 is treated as 1.
    pub fn with_max_versions(initial: impl Into<String>, max_versions: usize) -> Self {
        Self {
            versions: vec![initial.into()],
            current: 0,
            max_versions: max_versions.max(1),
        }
    }

    /// Record a new version and make it current
    pub fn commit(&mut self, snapshot: impl Into<String>) {
        self.versions.truncate(self.current + 1);
        self.versions.push(snapshot.into());

        // Evict oldest
        if self.versions.len() > self.max_versions {
            let excess = self.versions.len() - self.max_versions;
            self.versions.drain(..excess);
        }
        self.current = self.versions.len() - 1;
    }

    /// Step back one version, returning the body to restore
    pub fn undo(&mut self) -> Option<&str> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(&self.versions[self.current])
    }

    /// Step forward one version, returning the body to restore
    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.current += 1;
        Some(&self.versions[self.current])
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.versions.len()
    }

    /// The active snapshot
    pub fn current(&self) -> &str {
        &self.versions[self.current]
    }

    pub fn current_version(&self) -> usize {
        self.current
    }

    /// Number of stored versions
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn max_versions(&self) -> usize {
        self.max_versions
    }
}
