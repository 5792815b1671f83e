//! UI components

mod bulk_form;
mod copy_button;
mod footer;
mod header;
mod login_button;
mod modal;
mod qr_modal;
mod share_modal;
mod spinner;
mod url_analytics;
mod url_card;
mod url_form;
mod url_preview;
mod url_success_card;

pub use bulk_form::BulkForm;
pub use copy_button::CopyButton;
pub use footer::Footer;
pub use header::Header;
pub use login_button::LoginButton;
pub use modal::Modal;
pub use qr_modal::QrModal;
pub use share_modal::ShareModal;
pub use spinner::LoadingSpinner;
pub use url_analytics::AnalyticsModal;
pub use url_card::UrlCard;
pub use url_form::UrlForm;
pub use url_preview::{PreviewState, UrlPreview};
pub use url_success_card::UrlSuccessCard;
