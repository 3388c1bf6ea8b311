//! The shortener page.
//!
//! [`ShortenerView`] owns handles to every element it touches, resolved once
//! from a [`Document`] at bind time, plus the [`Alert`] surface used for the
//! empty-input notice. Two handlers hang off it:
//!
//! - [`ShortenerView::shorten`] turns the input into a fabricated short link
//!   and reveals the result region.
//! - [`ShortenerView::copy`] writes the displayed link to a [`Clipboard`] and
//!   flashes the confirmation message.
//!
//! The result region only ever goes from hidden to visible.
//!
//! Deferred callbacks (hiding the confirmation) are queued on a task set the
//! view owns. They run while the caller drives the page through
//! [`ShortenerView::run_until`].

use std::future::Future;

use rand::Rng;
use tokio::task::LocalSet;
use tokio::time::{Instant, sleep_until};

use crate::clipboard::{Clipboard, ClipboardError};
use crate::config::Settings;
use crate::dom::{Alert, Document, Element, HIDDEN_CLASS, SHOW_CLASS, ids};
use crate::error::{Error, Result};
use crate::link::ShortLink;

/// Notice raised when the shorten button is clicked with nothing to shorten.
pub const EMPTY_INPUT_NOTICE: &str = "Please paste a URL first!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// A link was generated and displayed. `target` is the trimmed input.
    Shortened { link: ShortLink, target: String },
    /// Input was empty after trimming; the page was left untouched.
    EmptyInput,
}

#[derive(Debug)]
pub enum CopyOutcome {
    /// The displayed text was written to the clipboard.
    Copied(String),
    /// The clipboard write failed; nothing was shown to the user.
    Failed(ClipboardError),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

#[derive(Debug)]
pub enum ClickOutcome {
    Shorten(ShortenOutcome),
    Copy(CopyOutcome),
}

pub struct ShortenerView<E, A> {
    url_input: E,
    shorten_button: E,
    result_container: E,
    short_url: E,
    copy_button: E,
    copy_message: E,
    alert: A,
    settings: Settings,
    deferred: LocalSet,
}

fn lookup<D: Document>(doc: &D, id: &'static str) -> Result<D::Element> {
    doc.element_by_id(id).ok_or(Error::MissingElement(id))
}

impl<E, A> ShortenerView<E, A>
where
    E: Element + 'static,
    A: Alert,
{
    /// Resolve the page elements from `doc` and build the view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] naming the first id the document
    /// does not contain.
    pub fn bind<D>(doc: &D, alert: A, settings: Settings) -> Result<Self>
    where
        D: Document<Element = E>,
    {
        Ok(Self {
            url_input: lookup(doc, ids::URL_INPUT)?,
            shorten_button: lookup(doc, ids::SHORTEN_BUTTON)?,
            result_container: lookup(doc, ids::RESULT_CONTAINER)?,
            short_url: lookup(doc, ids::SHORT_URL)?,
            copy_button: lookup(doc, ids::COPY_BUTTON)?,
            copy_message: lookup(doc, ids::COPY_MESSAGE)?,
            alert,
            settings,
            deferred: LocalSet::new(),
        })
    }

    /// Drive `fut` to completion while running the view's deferred callbacks.
    ///
    /// Callbacks whose deadline passed while the view was not being driven
    /// fire on the next call.
    pub async fn run_until<F: Future>(&self, fut: F) -> F::Output {
        self.deferred.run_until(fut).await
    }

    pub fn url_input(&self) -> &E {
        &self.url_input
    }

    pub fn short_url(&self) -> &E {
        &self.short_url
    }

    pub fn copy_message(&self) -> &E {
        &self.copy_message
    }

    pub fn result_visible(&self) -> bool {
        !self.result_container.has_class(HIDDEN_CLASS)
    }

    pub fn confirmation_visible(&self) -> bool {
        self.copy_message.has_class(SHOW_CLASS)
    }

    /// Shorten handler.
    ///
    /// Reads and trims the input. Empty input raises exactly one notice and
    /// changes nothing else. Otherwise the link text becomes
    /// `<prefix>/<code>`, its `href` the trimmed input, the result region is
    /// revealed and the input cleared.
    pub fn shorten<R: Rng + ?Sized>(&self, rng: &mut R) -> ShortenOutcome {
        let long_url = self.url_input.value().trim().to_string();

        if long_url.is_empty() {
            tracing::debug!("shorten rejected: empty input");
            self.alert.alert(EMPTY_INPUT_NOTICE);
            return ShortenOutcome::EmptyInput;
        }

        let link = ShortLink::generate(&self.settings.prefix, self.settings.code_length, rng);
        let display = link.to_string();

        self.short_url.set_text(&display);
        self.short_url.set_attribute("href", &long_url);
        self.result_container.remove_class(HIDDEN_CLASS);
        self.url_input.set_value("");

        tracing::info!(
            prefix = link.prefix(),
            code = link.code(),
            target = %long_url,
            "short link generated"
        );

        ShortenOutcome::Shortened {
            link,
            target: long_url,
        }
    }

    /// Copy handler.
    ///
    /// Writes the link text exactly as displayed. On success the
    /// confirmation is shown immediately and hidden again once the configured
    /// delay elapses. Each successful copy schedules its own hide, so an
    /// earlier copy's timer may hide a later copy's confirmation. Failures are
    /// logged and returned, never shown.
    ///
    /// The hide runs only while the view is driven with [`Self::run_until`].
    pub async fn copy<C: Clipboard + ?Sized>(&self, clipboard: &C) -> CopyOutcome {
        let text = self.short_url.text();

        match clipboard.write_text(&text).await {
            Ok(()) => {
                self.show_confirmation();
                CopyOutcome::Copied(text)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to copy");
                CopyOutcome::Failed(err)
            }
        }
    }

    /// Route a click on the element with id `target` to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnboundTarget`] for ids with no handler.
    pub async fn click<R, C>(
        &self,
        target: &str,
        rng: &mut R,
        clipboard: &C,
    ) -> Result<ClickOutcome>
    where
        R: Rng + ?Sized,
        C: Clipboard + ?Sized,
    {
        if target == self.shorten_button.id() {
            Ok(ClickOutcome::Shorten(self.shorten(rng)))
        } else if target == self.copy_button.id() {
            Ok(ClickOutcome::Copy(self.copy(clipboard).await))
        } else {
            Err(Error::UnboundTarget(target.to_string()))
        }
    }

    fn show_confirmation(&self) {
        self.copy_message.add_class(SHOW_CLASS);

        let message = self.copy_message.clone();
        let deadline = Instant::now() + self.settings.confirmation;
        self.deferred.spawn_local(async move {
            sleep_until(deadline).await;
            message.remove_class(SHOW_CLASS);
            tracing::debug!("copy confirmation hidden");
        });
    }
}
