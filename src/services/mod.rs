// Services module - Business logic

pub mod issuer;
pub mod luhn;
