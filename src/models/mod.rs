// Models module - Request and response types

pub mod card;
