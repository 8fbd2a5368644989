//! The client side of the contact-form submission pipeline: pure field
//! validation, a submission controller, and the HTTP transport that turns
//! a server response into a status panel.

pub mod form;
pub mod http;
pub mod transport;
pub mod validate;
