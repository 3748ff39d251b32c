//! Share requests and the normalized payload handed to providers.

use serde::{Deserialize, Serialize};

/// Binary data shared alongside a link or message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Raw bytes, e.g. an encoded PNG.
    pub data: Vec<u8>,
    /// MIME type of `data`, e.g. `image/png`.
    pub mime_type: String,
}

impl Attachment {
    /// Create an attachment.
    pub fn new(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Whether the attachment is an image, the one type every rich share sheet renders.
    #[must_use]
    pub fn is_image(&self) -> bool {
        is_image_type(&self.mime_type)
    }
}

/// Whether `mime_type` names an image.
#[must_use]
pub fn is_image_type(mime_type: &str) -> bool {
    mime_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// What a share request carries. Each variant holds its mandatory field, so a
/// request can never be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareContent {
    /// Plain text.
    Text(String),
    /// A link with an optional message.
    Link {
        /// The link.
        url: String,
        /// Message to include with the link.
        message: Option<String>,
    },
    /// Binary data with an optional link and message.
    Attachment {
        /// The data to share.
        attachment: Attachment,
        /// Link to include.
        url: Option<String>,
        /// Message to include.
        message: Option<String>,
    },
}

/// A single share request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    content: ShareContent,
    title: Option<String>,
    excluded_targets: Option<Vec<String>>,
}

impl ShareRequest {
    /// Share plain text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_content(ShareContent::Text(text.into()))
    }

    /// Share a link.
    pub fn link(url: impl Into<String>) -> Self {
        Self::from_content(ShareContent::Link {
            url: url.into(),
            message: None,
        })
    }

    /// Share binary data.
    pub fn attachment(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self::from_content(ShareContent::Attachment {
            attachment: Attachment::new(data, mime_type),
            url: None,
            message: None,
        })
    }

    const fn from_content(content: ShareContent) -> Self {
        Self {
            content,
            title: None,
            excluded_targets: None,
        }
    }

    /// Set the title, used as the share sheet heading or mail subject.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set or clear the title.
    #[must_use]
    pub fn with_optional_title(mut self, title: Option<&str>) -> Self {
        self.title = title.map(str::to_owned);
        self
    }

    /// Attach a message. Turns a text request into its message.
    #[must_use]
    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        match &mut self.content {
            ShareContent::Text(existing) => *existing = text,
            ShareContent::Link { message, .. } | ShareContent::Attachment { message, .. } => {
                *message = Some(text);
            }
        }
        self
    }

    /// Attach a link. Turns a text request into a link with that text as message.
    #[must_use]
    pub fn with_url(mut self, link: impl Into<String>) -> Self {
        let link = link.into();
        self.content = match self.content {
            ShareContent::Text(text) => ShareContent::Link {
                url: link,
                message: Some(text),
            },
            ShareContent::Link { message, .. } => ShareContent::Link { url: link, message },
            ShareContent::Attachment {
                attachment,
                message,
                ..
            } => ShareContent::Attachment {
                attachment,
                url: Some(link),
                message,
            },
        };
        self
    }

    /// Hide these share targets for this request only, instead of the
    /// process-wide list.
    #[must_use]
    pub fn with_excluded_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_targets = Some(targets.into_iter().map(Into::into).collect());
        self
    }

    /// The request content.
    #[must_use]
    pub const fn content(&self) -> &ShareContent {
        &self.content
    }

    /// The title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Targets hidden for this request, if it overrides the process-wide list.
    #[must_use]
    pub fn excluded_targets(&self) -> Option<&[String]> {
        self.excluded_targets.as_deref()
    }

    /// Normalize into the payload a provider presents.
    ///
    /// Empty strings are dropped and the attachment is kept only when
    /// `accepts` recognizes its MIME type. The request's own exclusion list
    /// wins over `default_excluded`.
    pub fn into_payload(
        self,
        accepts: impl Fn(&str) -> bool,
        default_excluded: impl FnOnce() -> Vec<String>,
    ) -> SharePayload {
        let (text, url, attachment) = match self.content {
            ShareContent::Text(text) => (Some(text), None, None),
            ShareContent::Link { url, message } => (message, Some(url), None),
            ShareContent::Attachment {
                attachment,
                url,
                message,
            } => (message, url, Some(attachment)),
        };

        let attachment = attachment.filter(|a| {
            let keep = !a.data.is_empty() && accepts(&a.mime_type);
            if !keep {
                log::debug!("dropping attachment of type {}", a.mime_type);
            }
            keep
        });

        SharePayload {
            text: non_empty(text),
            url: non_empty(url),
            attachment,
            subject: non_empty(self.title),
            excluded_targets: self.excluded_targets.unwrap_or_else(default_excluded),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// The provider-facing form of a [`ShareRequest`]. Absent fields are `None`,
/// never empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    /// Text or message.
    pub text: Option<String>,
    /// Link.
    pub url: Option<String>,
    /// Attachment the provider can render.
    pub attachment: Option<Attachment>,
    /// Heading or mail subject.
    pub subject: Option<String>,
    /// Native share targets to hide, read at call time.
    pub excluded_targets: Vec<String>,
}

impl SharePayload {
    /// Text fragments in presentation order: message first, then link.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.text.iter().chain(self.url.iter()).map(String::as_str)
    }

    /// All text fragments joined with `separator`.
    #[must_use]
    pub fn joined_text(&self, separator: &str) -> String {
        self.fragments().collect::<Vec<_>>().join(separator)
    }

    /// Whether there is nothing to present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none() && self.url.is_none() && self.attachment.is_none()
    }
}
