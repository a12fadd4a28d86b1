//! Link derivation service.

use std::sync::Arc;

use crate::domain::entities::{CountryEntry, DerivedLink, FormInput, WA_ME_BASE};
use crate::domain::ports::{Clipboard, CountryRegistry, Notification, Notifier};
use crate::domain::validation::{self, FieldError, Validity};
use crate::error::AppError;
use crate::utils::{SeparatorPolicy, normalize_phone_number};
use serde_json::json;
use tracing::{debug, warn};

/// Validity and derived link computed together from one form snapshot.
///
/// The link is always computed so a preview can be built, but it must only be
/// presented as actionable through [`FormSnapshot::visible_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub validity: Validity,
    pub link: DerivedLink,
}

impl FormSnapshot {
    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// The derived link, or `None` while the form is invalid.
    pub fn visible_link(&self) -> Option<&DerivedLink> {
        self.is_valid().then_some(&self.link)
    }
}

/// Result of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The form was invalid; nothing was copied and nobody was notified.
    Rejected(Vec<FieldError>),
    /// The link was written to the clipboard.
    Copied(DerivedLink),
    /// The clipboard refused the write. The failure was reported to the notifier.
    CopyFailed { link: DerivedLink, reason: String },
}

/// Service turning form snapshots into `wa.me` links.
///
/// Holds the injected country registry and the separator policy; every
/// operation is a pure function of its input apart from [`Self::copy_link`].
pub struct LinkService {
    registry: Arc<dyn CountryRegistry>,
    policy: SeparatorPolicy,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(registry: Arc<dyn CountryRegistry>, policy: SeparatorPolicy) -> Self {
        Self { registry, policy }
    }

    pub fn policy(&self) -> SeparatorPolicy {
        self.policy
    }

    /// Derives the canonical number and link for a form snapshot.
    ///
    /// # Algorithm
    ///
    /// 1. Resolve the dial prefix; an unknown country yields an empty prefix
    /// 2. Normalize the phone number (separators per policy, leading zeros)
    /// 3. `canonical_number = prefix + national number`
    /// 4. Append `?text=<percent-encoded>` only when text is non-empty
    ///
    /// Total over any input: never fails, never panics.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let link = service.derive(&FormInput::new("ID", "081234567890", "Hi there"));
    /// assert_eq!(link.url, "https://wa.me/6281234567890?text=Hi%20there");
    /// ```
    pub fn derive(&self, input: &FormInput) -> DerivedLink {
        let dial_prefix = match self.registry.lookup(&input.country_code) {
            Ok(prefix) => prefix,
            Err(e) => {
                debug!("{}, using empty dial prefix", e);
                String::new()
            }
        };

        let national_number = normalize_phone_number(&input.phone_number, self.policy);
        let canonical_number = format!("{}{}", dial_prefix, national_number);

        let query = if input.text.is_empty() {
            String::new()
        } else {
            format!("?text={}", urlencoding::encode(&input.text))
        };

        let url = format!(
            "{}{}{}",
            WA_ME_BASE,
            urlencoding::encode(&canonical_number),
            query
        );

        DerivedLink {
            canonical_number,
            url,
        }
    }

    /// Evaluates the validation gate for a form snapshot.
    pub fn evaluate(&self, input: &FormInput) -> Validity {
        validation::evaluate(input, self.policy)
    }

    /// Returns `true` when the snapshot may be copied.
    pub fn is_valid(&self, input: &FormInput) -> bool {
        validation::is_valid(input, self.policy)
    }

    /// Recomputes validity and link for a form snapshot.
    ///
    /// This is the single entry point front-ends call after every field change.
    pub fn snapshot(&self, input: &FormInput) -> FormSnapshot {
        FormSnapshot {
            validity: self.evaluate(input),
            link: self.derive(input),
        }
    }

    /// All selectable countries, ordered by display label.
    pub fn countries(&self) -> Vec<CountryEntry> {
        self.registry.list_all()
    }

    /// Retrieves a single country entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is not in the registry.
    pub fn country(&self, country_code: &str) -> Result<CountryEntry, AppError> {
        self.registry.entry(country_code).ok_or_else(|| {
            AppError::not_found(
                "Country not found",
                json!({ "country_code": country_code }),
            )
        })
    }

    /// Copies the link for a valid snapshot and reports the outcome.
    ///
    /// # Flow
    ///
    /// 1. Invalid snapshot: return [`CopyOutcome::Rejected`], no side effects
    /// 2. Exactly one clipboard write
    /// 3. One notification, matching the actual result of the write
    ///
    /// Clipboard failures are logged and reported to the notifier, never
    /// returned as an error.
    pub fn copy_link(
        &self,
        input: &FormInput,
        clipboard: &dyn Clipboard,
        notifier: &dyn Notifier,
    ) -> CopyOutcome {
        let snapshot = self.snapshot(input);
        let FormSnapshot { validity, link } = snapshot;

        if let Validity::Invalid(errors) = validity {
            debug!("Copy rejected: {} invalid field(s)", errors.len());
            return CopyOutcome::Rejected(errors);
        }

        match clipboard.write_text(&link.url) {
            Ok(()) => {
                notifier.notify(&Notification::success("Copied Link", link.url.clone()));
                CopyOutcome::Copied(link)
            }
            Err(e) => {
                warn!("Failed to copy link to clipboard: {}", e);
                let reason = e.to_string();
                notifier.notify(&Notification::failure("Copy Failed", reason.clone()));
                CopyOutcome::CopyFailed { link, reason }
            }
        }
    }
}
