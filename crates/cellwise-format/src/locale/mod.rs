mod registry;

pub use registry::{get_locale, DE_DE, EN_US, ES_ES, FR_FR};
