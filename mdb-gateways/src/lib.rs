pub mod email;
pub mod notify;
pub mod otp;
pub mod user_communication;
