mod auth_form;
mod body_class;
mod cta_link;
mod error_alert;
mod hero;
mod shell;

pub use auth_form::AuthForm;
pub use body_class::BodyClass;
pub use cta_link::CtaLink;
pub use error_alert::ErrorAlert;
pub use hero::Hero;
pub use shell::{PageShell, LEGAL_LINKS, NAV_ITEMS};
