// Shared view components
pub mod buttons;
pub mod cards;
pub mod footer;
pub mod forms;
pub mod layout;
pub mod modals;
pub mod notifications;
pub mod otp_input;
pub mod tables;
