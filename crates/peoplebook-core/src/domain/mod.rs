pub mod email;
pub mod ids;
pub mod person;
pub mod phone;
pub mod province;

pub use email::is_valid_email;
pub use ids::PersonId;
pub use person::{PersonDraft, PersonRecord, DEFAULT_COUNTRY};
pub use phone::{is_valid_phone_number, MIN_PHONE_DIGITS};
pub use province::Province;
