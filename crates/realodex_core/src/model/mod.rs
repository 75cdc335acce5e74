//! Contact domain model.
//!
//! # Responsibility
//! - Define validated field value types and the contact record.
//! - Define filter predicates and the in-memory contact list.
//!
//! # Invariants
//! - A field value object exists only if its raw input passed validation.
//! - Value objects are immutable; equality uses the normalized value.

pub mod address;
pub mod birthday;
pub mod contact_list;
pub mod email;
pub mod family;
pub mod field;
pub mod housing_type;
pub mod income;
pub mod index;
pub mod name;
pub mod person;
pub mod phone;
pub mod predicate;
pub mod remark;
pub mod tag;

pub use address::Address;
pub use birthday::Birthday;
pub use contact_list::ContactList;
pub use email::Email;
pub use family::Family;
pub use field::{FieldError, FieldKind};
pub use housing_type::HousingType;
pub use income::Income;
pub use index::Index;
pub use name::Name;
pub use person::Person;
pub use phone::Phone;
pub use predicate::PersonPredicate;
pub use remark::Remark;
pub use tag::Tag;
