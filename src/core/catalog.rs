use crate::domain::ports::TitleSource;
use crate::utils::error::{BookstoreError, Result};

/// How `contains_substring` compares a fragment against titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

impl MatchPolicy {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::CaseSensitive
        } else {
            Self::CaseInsensitive
        }
    }
}

/// Outcome of the one-time load step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    /// The source could not be read; the catalog is empty.
    Degraded { reason: String },
}

/// Reads every title from `source`. Any failure comes back as `LoadFailure`.
pub fn load_titles<S: TitleSource + ?Sized>(source: &mut S) -> Result<Vec<String>> {
    source.read_titles().map_err(|e| match e {
        e @ BookstoreError::LoadFailure { .. } => e,
        other => BookstoreError::load_failure(source.describe(), other),
    })
}

/// The titles a store carries. Populated once at construction, read-only afterwards.
#[derive(Debug, Clone)]
pub struct TitleCatalog {
    titles: Vec<String>,
    policy: MatchPolicy,
    status: LoadStatus,
}

impl TitleCatalog {
    /// 從來源載入書名；讀取失敗時記錄警告並退回空目錄
    pub fn load<S: TitleSource + ?Sized>(source: &mut S) -> Self {
        Self::load_with_policy(source, MatchPolicy::default())
    }

    pub fn load_with_policy<S: TitleSource + ?Sized>(source: &mut S, policy: MatchPolicy) -> Self {
        match load_titles(source) {
            Ok(titles) => {
                tracing::debug!("Loaded {} titles from {}", titles.len(), source.describe());
                Self {
                    titles,
                    policy,
                    status: LoadStatus::Loaded,
                }
            }
            Err(e) => {
                tracing::warn!("Could not initialize the titles: {}", e);
                Self {
                    titles: Vec::new(),
                    policy,
                    status: LoadStatus::Degraded {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    pub fn from_titles(titles: Vec<String>) -> Self {
        Self {
            titles,
            policy: MatchPolicy::default(),
            status: LoadStatus::Loaded,
        }
    }

    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    pub fn count(&self) -> usize {
        self.titles.len()
    }

    /// True when any title contains `fragment`. An empty fragment matches
    /// every title, so it is true exactly when the catalog is non-empty.
    pub fn contains_substring(&self, fragment: &str) -> bool {
        match self.policy {
            MatchPolicy::CaseSensitive => self.titles.iter().any(|t| t.contains(fragment)),
            MatchPolicy::CaseInsensitive => {
                let needle = fragment.to_lowercase();
                self.titles
                    .iter()
                    .any(|t| t.to_lowercase().contains(&needle))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn match_policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.status, LoadStatus::Degraded { .. })
    }
}

impl Default for TitleCatalog {
    fn default() -> Self {
        Self::from_titles(Vec::new())
    }
}
